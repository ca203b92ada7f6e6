use_prelude!();

/// The body-side end of a [`Coroutine`]: hands values out to the controller
/// and waits for the next resume argument.
///
/// A `&Yielder` is given to the body when it starts. It cannot leave the
/// worker thread.
///
/// # Example
///
/// ```rust
/// use ::thread_coro::prelude::*;
///
/// let mut running_total = Coroutine::<i32, i32, ()>::new_sub(|mut n, co| {
///     let mut total = 0;
///     loop {
///         total += n;
///         n = co.yield_(total);
///     }
/// });
/// let mut add = |n| running_total.resume(n).and_then(CoroutineState::yielded);
/// assert_eq!(add(3), Some(3));
/// assert_eq!(add(4), Some(7));
/// assert_eq!(add(-7), Some(0));
/// ```
pub
struct Yielder<'co, ResumeArg, Yield> {
    inbox: &'co handoff::Receiver<Command<ResumeArg>>,
    outbox: &'co dyn Outbox<Yield>,
    record: &'co Record,
    cancelled: Cell<bool>,
}

pub(in crate)
trait Outbox<Yield> {
    fn yielded (self: &'_ Self, value: Yield)
      -> Result<(), HungUp>
    ;
}

impl<Yield, Return> Outbox<Yield>
    for handoff::Sender<Event<Yield, Return>>
{
    fn yielded (self: &'_ Self, value: Yield)
      -> Result<(), HungUp>
    {
        self.send(Event::Yielded(value))
            .map_err(|HungUp(_)| HungUp(()))
    }
}

impl<'co, ResumeArg, Yield> Yielder<'co, ResumeArg, Yield> {
    pub(in crate)
    fn new (
        inbox: &'co handoff::Receiver<Command<ResumeArg>>,
        outbox: &'co dyn Outbox<Yield>,
        record: &'co Record,
    ) -> Self
    {
        Self {
            inbox,
            outbox,
            record,
            cancelled: Cell::new(false),
        }
    }

    /// Suspends the body, handing `value` to the pending
    /// [`resume`][`Coroutine::resume`], and returns the argument of the next
    /// one.
    ///
    /// If the controller [`stop`][`Coroutine::stop`]s the coroutine instead,
    /// this call never returns: the body's stack is unwound from here, running
    /// its destructors, and the worker thread exits. The same happens on every
    /// later call once a stop has been observed.
    pub
    fn yield_ (self: &'_ Self, value: Yield)
      -> ResumeArg
    {
        if self.cancelled.get() {
            Cancelled::raise();
        }
        self.record.enter(Phase::Suspended);
        if let Err(HungUp(())) = self.outbox.yielded(value) {
            self.cancel();
        }
        match self.inbox.recv() {
            | Ok(Command::Resume(arg)) => {
                self.record.enter(Phase::Running);
                arg
            },
            | Ok(Command::Cancel) | Err(HungUp(())) => self.cancel(),
        }
    }

    fn cancel (self: &'_ Self)
      -> !
    {
        self.cancelled.set(true);
        with_current_label!(|label| {
            trace!("coroutine `{}`: unwinding its body on stop", label);
        });
        Cancelled::raise()
    }
}

impl<ResumeArg, Yield> fmt::Debug for Yielder<'_, ResumeArg, Yield> {
    fn fmt (self: &'_ Self, f: &'_ mut fmt::Formatter<'_>)
      -> fmt::Result
    {
        f   .debug_struct("Yielder")
            .field("cancelled", &self.cancelled.get())
            .finish()
    }
}
