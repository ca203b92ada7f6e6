use_prelude!();

/// Value obtained when [resuming][`Coroutine::resume`] a [`Coroutine`].
///
/// This corresponds to:
///
///   - either a [suspension point][`CoroutineState::Yielded`],
///
///   - or a [termination point][`CoroutineState::Returned`].
#[derive(
    Debug,
    Clone, Copy,
    PartialOrd, Ord,
    PartialEq, Eq,
    Hash
)]
pub
enum CoroutineState<Yield, Return = Yield> {
    /// The body reached a `yield_` with this value, and is now suspended
    /// there, waiting for the next [`resume`][`Coroutine::resume`].
    Yielded(Yield),

    /// The body _completed_ with this value. Further resumes return `None`.
    Returned(Return),
}

impl<Yield, Return> CoroutineState<Yield, Return> {
    /// The yielded value, if any.
    #[inline]
    pub
    fn yielded (self: Self)
      -> Option<Yield>
    {
        match self {
            | Self::Yielded(value) => Some(value),
            | Self::Returned(_) => None,
        }
    }

    /// The returned value, if any.
    #[inline]
    pub
    fn returned (self: Self)
      -> Option<Return>
    {
        match self {
            | Self::Yielded(_) => None,
            | Self::Returned(value) => Some(value),
        }
    }
}

impl<T> CoroutineState<T, T> {
    /// The carried value, be it yielded or returned.
    #[inline]
    pub
    fn into_inner (self: Self)
      -> T
    {
        match self {
            | Self::Yielded(value) | Self::Returned(value) => value,
        }
    }
}

/// Controller → worker.
pub(in crate)
enum Command<ResumeArg> {
    Resume(ResumeArg),
    Cancel,
}

/// Worker → controller.
pub(in crate)
enum Event<Yield, Return> {
    Yielded(Yield),
    Returned(Return),
    /// The payload sits in the [`Record`].
    Faulted,
}

/// An asymmetric coroutine whose body runs on a dedicated worker thread.
///
/// The caller (the _controller_) drives the body step by step: each
/// [`.resume(arg)`][`Coroutine::resume`] hands `arg` to the body and blocks
/// until the body either [`yield_`][`Yielder::yield_`]s a value or returns.
/// Only one of the two threads ever runs at a time.
///
///   - `ResumeArg` is what the body receives: first as its initial argument,
///     then as the value of each `yield_`;
///
///   - `Yield` is what the body hands out at each `yield_`;
///
///   - `Return` is what the body finally returns (the same as `Yield` unless
///     specified otherwise; `()` for a [`Subroutine`]).
///
/// # Example
///
/// ```rust
/// use ::thread_coro::prelude::*;
///
/// let mut coroutine = Coroutine::<&str, usize>::new(|first, co| {
///     let mut total = first.len();
///     for _ in 0 .. 2 {
///         let next = co.yield_(total);
///         total += next.len();
///     }
///     total * 100
/// });
///
/// let mut next = |arg| coroutine.resume(arg);
/// assert_eq!(next("a"), Some(CoroutineState::Yielded(1)));
/// assert_eq!(next("bb"), Some(CoroutineState::Yielded(3)));
/// assert_eq!(next("ccc"), Some(CoroutineState::Returned(600)));
/// assert_eq!(next("dddd"), None);
/// ```
///
/// # Stopping
///
/// [`.stop()`][`Coroutine::stop`] cancels a suspended body: its stack is
/// unwound from the pending `yield_`, running destructors along the way, and
/// the worker thread is joined before `stop` returns. Dropping a `Coroutine`
/// stops it.
///
/// # Panics
///
/// A panic in the body is captured on the worker thread and re-raised, once,
/// by the call that observes it (`resume` or `stop`). Afterwards the coroutine
/// behaves as a completed one. The [`try_resume`][`Coroutine::try_resume`] and
/// [`try_stop`][`Coroutine::try_stop`] variants return the [`Fault`] instead.
///
/// Since the body is torn down by unwinding, a destructor in the body which
/// itself panics during a stop aborts the process, as with any panic during
/// unwinding.
pub
struct Coroutine<ResumeArg, Yield, Return = Yield> {
    outbox: handoff::Sender<Command<ResumeArg>>,
    inbox: handoff::Receiver<Event<Yield, Return>>,
    record: Arc<Record>,
    /// Taken and joined once the phase is terminal.
    worker: Option<JoinHandle<()>>,
    name: Option<String>,
}

/// A [`Coroutine`] whose body returns nothing (typically, an endless
/// generator).
pub
type Subroutine<ResumeArg, Yield> = Coroutine<ResumeArg, Yield, ()>;

impl<ResumeArg, Yield, Return> Coroutine<ResumeArg, Yield, Return>
where
    ResumeArg : Send + 'static,
    Yield : Send + 'static,
    Return : Send + 'static,
{
    /// Spawns the worker thread for `body`, which starts running on the
    /// first [`resume`][`Coroutine::resume`].
    ///
    /// # Panics
    ///
    /// If the OS fails to create a thread. Use [`Builder::spawn`] to handle
    /// that case.
    pub
    fn new<F> (body: F)
      -> Self
    where
        F : FnOnce(ResumeArg, &'_ Yielder<'_, ResumeArg, Yield>) -> Return,
        F : Send + 'static,
    {
        Builder::new()
            .spawn(body)
            .unwrap_or_else(|err| panic!("{}", err))
    }

    pub(in crate)
    fn spawn_with<F> (config: Builder, body: F)
      -> Result<Self, Error>
    where
        F : FnOnce(ResumeArg, &'_ Yielder<'_, ResumeArg, Yield>) -> Return,
        F : Send + 'static,
    {
        let (outbox, worker_inbox) = handoff::channel();
        let (worker_outbox, inbox) = handoff::channel();
        let record = Arc::new(Record::new());

        let mut thread = thread::Builder::new();
        if let Some(name) = config.name.clone() {
            thread = thread.name(name);
        }
        if let Some(stack_size) = config.stack_size {
            thread = thread.stack_size(stack_size);
        }
        let worker = thread.spawn({
            let record = Arc::clone(&record);
            move || boundary::run(body, worker_inbox, worker_outbox, record)
        })?;
        debug!("coroutine `{}`: spawned", Label(config.name.as_deref()));

        Ok(Self {
            outbox,
            inbox,
            record,
            worker: Some(worker),
            name: config.name,
        })
    }
}

impl<ResumeArg, Yield> Coroutine<ResumeArg, Yield, ()>
where
    ResumeArg : Send + 'static,
    Yield : Send + 'static,
{
    /// Same as [`Coroutine::new`], for a body that returns nothing.
    ///
    /// Its completion is reported as `Returned(())`.
    #[inline]
    pub
    fn new_sub<F> (body: F)
      -> Self
    where
        F : FnOnce(ResumeArg, &'_ Yielder<'_, ResumeArg, Yield>),
        F : Send + 'static,
    {
        Self::new(body)
    }
}

impl<ResumeArg, Yield, Return> Coroutine<ResumeArg, Yield, Return> {
    /// Runs the body until its next `yield_` (or its end), handing it `arg`.
    ///
    /// On the first call, `arg` is the body's initial argument; afterwards it
    /// is the value the pending `yield_` evaluates to.
    ///
    /// Returns `None`, without involving the worker thread, once the
    /// coroutine is finished (returned, stopped, or failed).
    ///
    /// # Panics
    ///
    /// Re-raises the panic of the body, if it panics during this step, or if
    /// it panicked earlier and that panic has not been delivered yet.
    pub
    fn resume (self: &'_ mut Self, arg: ResumeArg)
      -> Option<CoroutineState<Yield, Return>>
    {
        self.settle(move |this| this.exchange(arg))
    }

    /// Same as [`.resume()`][`Coroutine::resume`], but returns an undelivered
    /// body panic rather than re-raising it.
    pub
    fn try_resume (self: &'_ mut Self, arg: ResumeArg)
      -> Result<Option<CoroutineState<Yield, Return>>, Fault>
    {
        let outcome = self.exchange(arg);
        self.reap();
        outcome
    }

    /// Cancels the coroutine: a suspended body is unwound from its pending
    /// `yield_`, and the worker thread has exited by the time this returns.
    ///
    /// Idempotent: on a finished coroutine, this does nothing.
    ///
    /// # Panics
    ///
    /// Re-raises the panic of the body, if it panics while winding down, or
    /// if it panicked earlier and that panic has not been delivered yet.
    pub
    fn stop (self: &'_ mut Self)
    {
        self.settle(Self::cancel)
    }

    /// Same as [`.stop()`][`Coroutine::stop`], but returns an undelivered
    /// body panic rather than re-raising it.
    pub
    fn try_stop (self: &'_ mut Self)
      -> Result<(), Fault>
    {
        let outcome = self.cancel();
        self.reap();
        outcome
    }

    /// The current [`Phase`].
    #[inline]
    pub
    fn phase (self: &'_ Self)
      -> Phase
    {
        self.record.phase()
    }

    /// Whether the coroutine has returned, been stopped, or failed.
    #[inline]
    pub
    fn is_finished (self: &'_ Self)
      -> bool
    {
        self.phase().is_terminal()
    }

    /// The name given through [`Builder::name`], if any.
    #[inline]
    pub
    fn name (self: &'_ Self)
      -> Option<&'_ str>
    {
        self.name.as_deref()
    }

    fn exchange (self: &'_ mut Self, arg: ResumeArg)
      -> Result<Option<CoroutineState<Yield, Return>>, Fault>
    {
        if self.is_finished() {
            return self.undelivered().map(|()| None);
        }
        trace!("coroutine `{}`: resuming", Label(self.name()));
        if let Err(HungUp(_)) = self.outbox.send(Command::Resume(arg)) {
            return self.undelivered().map(|()| None);
        }
        match self.inbox.recv() {
            | Ok(Event::Yielded(value)) => Ok(Some(CoroutineState::Yielded(value))),
            | Ok(Event::Returned(value)) => Ok(Some(CoroutineState::Returned(value))),
            | Ok(Event::Faulted) | Err(HungUp(())) => self.undelivered().map(|()| None),
        }
    }

    fn cancel (self: &'_ mut Self)
      -> Result<(), Fault>
    {
        if self.is_finished() {
            return self.undelivered();
        }
        trace!("coroutine `{}`: stopping", Label(self.name()));
        if self.outbox.send(Command::Cancel).is_ok() {
            match self.inbox.recv() {
                // Clean: the worker hung up without a word.
                | Err(HungUp(())) => {},
                // The body caught the unwind and returned anyway.
                | Ok(Event::Returned(_)) => {},
                | Ok(Event::Faulted) => {},
                | Ok(Event::Yielded(_)) => unreachable!("a stopped body cannot yield"),
            }
        }
        self.undelivered()
    }

    fn undelivered (self: &'_ Self)
      -> Result<(), Fault>
    {
        self.record
            .take_fault()
            .map_or(Ok(()), Err)
    }

    /// Runs `step`, re-raising its fault, and joins the worker if it is done
    /// for, even while that fault unwinds.
    fn settle<T> (
        self: &'_ mut Self,
        step: impl FnOnce(&mut Self) -> Result<T, Fault>,
    ) -> T
    {
        ::unwind_safe::with_state(self)
            .try_eval(move |this| {
                step(&mut **this).unwrap_or_else(|fault| fault.resume())
            })
            .finally(|this| this.reap())
    }

    /// Joins the worker thread once it is known to be exiting.
    fn reap (self: &'_ mut Self)
    {
        if self.is_finished().not() {
            return;
        }
        if let Some(worker) = self.worker.take() {
            match worker.join() {
                | Ok(()) => debug!("coroutine `{}`: worker joined", Label(self.name())),
                | Err(_) => error!(
                    "coroutine `{}`: worker thread panicked outside of its body",
                    Label(self.name()),
                ),
            }
        }
    }
}

impl<ResumeArg, Yield, Return> Drop
    for Coroutine<ResumeArg, Yield, Return>
{
    fn drop (self: &'_ mut Self)
    {
        if thread::panicking() {
            // Already unwinding (_e.g._, an outer coroutine being stopped):
            // a second panic would abort.
            if let Err(fault) = self.try_stop() {
                error!(
                    "coroutine `{}`: dropped during a panic, discarding: {}",
                    Label(self.name()), fault,
                );
            }
        } else {
            self.stop();
        }
    }
}

impl<ResumeArg, Yield, Return> fmt::Debug
    for Coroutine<ResumeArg, Yield, Return>
{
    fn fmt (self: &'_ Self, f: &'_ mut fmt::Formatter<'_>)
      -> fmt::Result
    {
        f   .debug_struct("Coroutine")
            .field("name", &self.name)
            .field("phase", &self.phase())
            .finish()
    }
}
