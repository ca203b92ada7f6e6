use_prelude!();

/// Worker thread configuration for a [`Coroutine`].
///
/// Mirrors [`std::thread::Builder`], and like it reports spawn failures
/// instead of panicking.
///
/// # Example
///
/// ```rust
/// use ::thread_coro::prelude::*;
///
/// # fn main () -> Result<(), ::thread_coro::Error> {
/// let mut countdown =
///     Builder::new()
///         .name("countdown")
///         .stack_size(64 * 1024)
///         .spawn_sub(|mut n: u32, co| {
///             while let Some(next) = n.checked_sub(1) {
///                 co.yield_(n);
///                 n = next;
///             }
///         })?
/// ;
/// assert_eq!(countdown.name(), Some("countdown"));
/// assert_eq!(
///     countdown.resume(2),
///     Some(CoroutineState::<u32, ()>::Yielded(2)),
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub
struct Builder {
    pub(in crate) name: Option<String>,
    pub(in crate) stack_size: Option<usize>,
}

impl Builder {
    /// The default configuration: an unnamed thread with the platform's
    /// default stack size.
    #[inline]
    pub
    fn new ()
      -> Self
    {
        Self::default()
    }

    /// Names the worker thread. The name shows up in panic messages and log
    /// lines, and through [`Coroutine::name`].
    pub
    fn name (self: Self, name: impl Into<String>)
      -> Self
    {
        Self { name: Some(name.into()), ..self }
    }

    /// Stack size of the worker thread, in bytes.
    pub
    fn stack_size (self: Self, bytes: usize)
      -> Self
    {
        Self { stack_size: Some(bytes), ..self }
    }

    /// Spawns the worker thread of a [`Coroutine`] running `body`.
    ///
    /// See [`Coroutine::new`].
    pub
    fn spawn<ResumeArg, Yield, Return, F> (self: Self, body: F)
      -> Result<Coroutine<ResumeArg, Yield, Return>, Error>
    where
        ResumeArg : Send + 'static,
        Yield : Send + 'static,
        Return : Send + 'static,
        F : FnOnce(ResumeArg, &'_ Yielder<'_, ResumeArg, Yield>) -> Return,
        F : Send + 'static,
    {
        Coroutine::spawn_with(self, body)
    }

    /// Spawns the worker thread of a [`Subroutine`][`crate::Subroutine`]
    /// running `body`.
    ///
    /// See [`Coroutine::new_sub`].
    pub
    fn spawn_sub<ResumeArg, Yield, F> (self: Self, body: F)
      -> Result<Coroutine<ResumeArg, Yield, ()>, Error>
    where
        ResumeArg : Send + 'static,
        Yield : Send + 'static,
        F : FnOnce(ResumeArg, &'_ Yielder<'_, ResumeArg, Yield>),
        F : Send + 'static,
    {
        self.spawn(body)
    }
}
