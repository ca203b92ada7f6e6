//! Error types.

use_prelude!();
use ::thiserror::Error;

/// A panic raised by a coroutine body, captured on its worker thread.
///
/// [`Coroutine::resume`] and [`Coroutine::stop`] re-raise it on the caller's
/// stack (through [`Fault::resume`]); the `try_` variants hand it out instead.
/// Either way, a given fault is delivered exactly once.
///
/// `Send` but not `Sync`, since the payload is only `Send`.
#[derive(Error)]
#[error("coroutine body panicked: {}", self.describe())]
pub
struct Fault {
    payload: Box<dyn Any + Send + 'static>,
}

impl Fault {
    pub(in crate)
    fn new (payload: Box<dyn Any + Send + 'static>)
      -> Self
    {
        Self { payload }
    }

    /// The panic message, for `panic!`s with a `&str` or `String` payload.
    pub
    fn message (self: &'_ Self)
      -> Option<&'_ str>
    {
        let payload: &(dyn Any + Send) = &*self.payload;
        payload
            .downcast_ref::<&'static str>()
            .copied()
            .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
    }

    fn describe (self: &'_ Self)
      -> &'_ str
    {
        self.message().unwrap_or("Box<dyn Any>")
    }

    /// The raw panic payload.
    pub
    fn payload (self: &'_ Self)
      -> &'_ (dyn Any + Send + 'static)
    {
        &*self.payload
    }

    /// The raw panic payload, by value (_e.g._, for
    /// [`panic::resume_unwind`]).
    pub
    fn into_payload (self: Self)
      -> Box<dyn Any + Send + 'static>
    {
        self.payload
    }

    /// Re-raises the original panic on the current thread, without invoking
    /// the panic hook a second time.
    pub
    fn resume (self: Self)
      -> !
    {
        panic::resume_unwind(self.payload)
    }
}

impl fmt::Debug for Fault {
    fn fmt (self: &'_ Self, f: &'_ mut fmt::Formatter<'_>)
      -> fmt::Result
    {
        f   .debug_struct("Fault")
            .field("message", &self.describe())
            .finish()
    }
}

/// Everything that can go wrong when driving a coroutine without panicking.
///
/// Like [`Fault`], whose panic payload is only `Send`, this type is `Send`
/// but not `Sync`: it does not fit in a `Box<dyn Error + Send + Sync>`. Use
/// [`Fault::message`] to carry the panic message further as a `String`.
#[derive(Debug, Error)]
pub
enum Error {
    /// The OS refused to spawn the worker thread.
    #[error("failed to spawn the coroutine worker thread: {0}")]
    Spawn(#[from] ::std::io::Error),

    /// The coroutine body panicked.
    #[error(transparent)]
    Panicked(#[from] Fault),
}
