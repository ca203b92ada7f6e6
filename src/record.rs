//! The state shared between a [`Coroutine`] handle and its worker thread.

use_prelude!();

/// Where a [`Coroutine`] is in its lifecycle.
///
/// Transitions are monotonic: once [`Completed`][`Phase::Completed`] or
/// [`Failed`][`Phase::Failed`] is reached, the phase never changes again.
#[derive(
    Debug,
    Clone, Copy,
    PartialEq, Eq,
    Hash,
)]
pub
enum Phase {
    /// Not started yet, or parked inside a `yield_`.
    Suspended,

    /// The worker thread currently holds control.
    Running,

    /// The body returned, or was stopped cleanly.
    Completed,

    /// The body panicked.
    Failed,
}

impl Phase {
    /// Whether no more values can come out of the coroutine.
    #[inline]
    pub
    fn is_terminal (self: Self)
      -> bool
    {
        matches!(self, Phase::Completed | Phase::Failed)
    }
}

pub(in crate)
struct Record {
    state: Mutex<State>,
}

struct State {
    phase: Phase,
    /// Set at most once, by the worker; taken at most once, by the handle.
    fault: Option<Fault>,
}

impl Record {
    pub(in crate)
    fn new ()
      -> Self
    {
        Self {
            state: Mutex::new(State {
                phase: Phase::Suspended,
                fault: None,
            }),
        }
    }

    fn lock (self: &'_ Self)
      -> MutexGuard<'_, State>
    {
        // Nothing panics while holding the lock.
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub(in crate)
    fn phase (self: &'_ Self)
      -> Phase
    {
        self.lock().phase
    }

    /// Moves to a non-failed `phase`, unless already terminal.
    pub(in crate)
    fn enter (self: &'_ Self, phase: Phase)
    {
        debug_assert_ne!(phase, Phase::Failed, "use `Record::fail`");
        let mut state = self.lock();
        if state.phase.is_terminal().not() {
            state.phase = phase;
        }
    }

    pub(in crate)
    fn fail (self: &'_ Self, fault: Fault)
    {
        let mut state = self.lock();
        debug_assert!(state.phase.is_terminal().not());
        state.phase = Phase::Failed;
        state.fault = Some(fault);
    }

    /// Hands out the captured fault, if it has not been delivered yet.
    pub(in crate)
    fn take_fault (self: &'_ Self)
      -> Option<Fault>
    {
        self.lock().fault.take()
    }
}
