//! What runs on a coroutine's worker thread.

use_prelude!();

/// Unwind payload used to tear a suspended body down on `stop`.
///
/// Raised by [`Yielder::yield_`] only, and swallowed by [`run`] only. The
/// private field keeps it from being built anywhere else.
pub(in crate)
struct Cancelled(());

impl Cancelled {
    pub(in crate)
    fn raise ()
      -> !
    {
        // `resume_unwind` skips the panic hook: a stop is not a panic.
        panic::resume_unwind(Box::new(Cancelled(())))
    }
}

/// The worker thread's entry point.
///
/// Waits for the first command, runs `body` to completion, and reports how it
/// ended. The phase is updated before the final message goes out, so the
/// controller sees a terminal phase as soon as it wakes up.
pub(in crate)
fn run<ResumeArg, Yield, Return, F> (
    body: F,
    inbox: handoff::Receiver<Command<ResumeArg>>,
    outbox: handoff::Sender<Event<Yield, Return>>,
    record: Arc<Record>,
)
where
    F : FnOnce(ResumeArg, &'_ Yielder<'_, ResumeArg, Yield>) -> Return,
{
    let outcome = match inbox.recv() {
        | Ok(Command::Resume(first)) => {
            record.enter(Phase::Running);
            let yielder = Yielder::new(&inbox, &outbox, &record);
            panic::catch_unwind(AssertUnwindSafe(|| {
                Some(body(first, &yielder))
            }))
        },
        | Ok(Command::Cancel) | Err(HungUp(())) => {
            // Never started: only the captured state needs to go, and its
            // destructors may panic too.
            panic::catch_unwind(AssertUnwindSafe(move || {
                drop(body);
                None
            }))
        },
    };

    with_current_label!(|label| match outcome {
        | Ok(Some(value)) => {
            record.enter(Phase::Completed);
            debug!("coroutine `{}`: returned", label);
            if outbox.send(Event::Returned(value)).is_err() {
                trace!("coroutine `{}`: nobody is waiting for the return value", label);
            }
        },
        | Ok(None) => {
            record.enter(Phase::Completed);
            debug!("coroutine `{}`: stopped before its first resume", label);
        },
        | Err(payload) if payload.is::<Cancelled>() => {
            record.enter(Phase::Completed);
            debug!("coroutine `{}`: stopped", label);
        },
        | Err(payload) => {
            let fault = Fault::new(payload);
            debug!("coroutine `{}`: {}", label, fault);
            record.fail(fault);
            if outbox.send(Event::Faulted).is_err() {
                trace!("coroutine `{}`: nobody is waiting for the fault", label);
            }
        },
    });
    // Dropping `outbox` hangs up: that is how a stop learns the worker is gone
    // when there is nothing else to report.
}
