use_prelude!();

/// A coroutine resumed with `()` is an iterator over its yielded values.
///
/// The final [`Returned`][`crate::CoroutineState::Returned`] value, having no slot in
/// an iterator, is discarded. Iteration stops there, and for good.
///
/// ```rust
/// use ::thread_coro::prelude::*;
///
/// let squares = Subroutine::<(), u64>::new_sub(|(), co| {
///     for n in 1 .. {
///         co.yield_(n * n);
///     }
/// });
/// assert_eq!(
///     squares.take(4).collect::<Vec<_>>(),
///     [1, 4, 9, 16],
/// );
/// ```
impl<Yield, Return> Iterator
    for Coroutine<(), Yield, Return>
{
    type Item = Yield;

    fn next (self: &'_ mut Self)
      -> Option<Yield>
    {
        self.resume(())?
            .yielded()
    }
}

impl<Yield, Return> ::core::iter::FusedIterator
    for Coroutine<(), Yield, Return>
{}
