//! Asymmetric coroutines, backed by one dedicated worker thread each.
//!
//! A [`Coroutine`] runs its body on its own thread, but never concurrently
//! with its caller: every [`resume`][`Coroutine::resume`] hands one value to
//! the body and blocks until the body [`yield_`][`Yielder::yield_`]s one back
//! (or returns), at which point the body blocks in turn. The body can thus
//! keep its progress in plain local variables and control flow, rather than
//! in a hand-written state machine, and can block, recurse, or call into
//! any synchronous code in-between yields.
//!
//! ```rust
//! use ::thread_coro::prelude::*;
//!
//! let mut fib = Subroutine::<(), u64>::new_sub(|(), co| {
//!     let (mut a, mut b) = (0, 1);
//!     loop {
//!         co.yield_(a);
//!         let next = a + b;
//!         a = b;
//!         b = next;
//!     }
//! });
//! assert_eq!(
//!     fib.by_ref().take(8).collect::<Vec<_>>(),
//!     [0, 1, 1, 2, 3, 5, 8, 13],
//! );
//! // The body is parked in `yield_`; stopping unwinds it and joins the thread.
//! fib.stop();
//! assert!(fib.is_finished());
//! assert_eq!(fib.next(), None);
//! ```
//!
//! With the (default) `macros` feature, [`#[coroutine_fn]`][`coroutine_fn`] turns a
//! function using `yield_!` into a constructor of such coroutines:
//!
//! ```rust
//! # #[cfg(feature = "macros")] fn main () {
//! use ::thread_coro::prelude::*;
//!
//! #[coroutine_fn(yield(u8))]
//! fn countdown (from: u8)
//!   -> &'static str
//! {
//!     for n in (1 ..= from).rev() {
//!         yield_!(n);
//!     }
//!     "liftoff"
//! }
//!
//! let mut coroutine = countdown(2);
//! assert_eq!(coroutine.resume(()), Some(CoroutineState::Yielded(2)));
//! assert_eq!(coroutine.resume(()), Some(CoroutineState::Yielded(1)));
//! assert_eq!(coroutine.resume(()), Some(CoroutineState::Returned("liftoff")));
//! assert_eq!(coroutine.resume(()), None);
//! # }
//! # #[cfg(not(feature = "macros"))] fn main () {}
//! ```

#![warn(
    future_incompatible,
    rust_2018_compatibility,
    missing_docs,
    clippy::cargo,
    clippy::pedantic,
)]
#![deny(
    unused_must_use,
)]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(feature = "better-docs",
    feature(doc_cfg),
)]

extern crate self as thread_coro;

#[path = "public_prelude.rs"]
pub
mod prelude;

#[macro_use]
mod utils;

mod boundary;

pub use self::builder::Builder;
mod builder;

pub use self::coroutine::{Coroutine, CoroutineState, Subroutine};
mod coroutine;

pub use self::error::{Error, Fault};
mod error;

mod handoff;

mod iter;

pub use self::record::Phase;
mod record;

pub use self::yielder::Yielder;
mod yielder;

/// Turns a function using `yield_!` into a [`Coroutine`] constructor.
///
/// ```rust
/// # const _: &str = stringify! {
/// #[coroutine_fn(yield(Yield))]
/// #[coroutine_fn(Yield)]                              // shorthand
/// #[coroutine_fn(yield(Yield), resume(ResumeArg) as first_arg_pattern)]
/// # };
/// ```
///
/// The function keeps its parameters, which are moved into the worker thread
/// (so they must be `Send + 'static`), and now returns a
/// `Coroutine<ResumeArg, Yield, Return>`, `Return` being the declared return
/// type (`()` if none), and `ResumeArg` being `()` when no `resume(…)` is
/// given.
///
/// Inside the body, `yield_!(value)` suspends the body with `value` and
/// evaluates to the next resume argument; the first resume argument is bound
/// to the pattern after `as`.
///
/// ```rust
/// use ::thread_coro::prelude::*;
///
/// #[coroutine_fn(yield(i64), resume(i64) as mut delta)]
/// fn accumulator (mut total: i64)
/// {
///     loop {
///         total += delta;
///         delta = yield_!(total);
///     }
/// }
///
/// let mut acc = accumulator(10);
/// assert_eq!(acc.resume(5), Some(CoroutineState::Yielded(15)));
/// assert_eq!(acc.resume(-20), Some(CoroutineState::Yielded(-5)));
/// ```
#[cfg(feature = "macros")]
#[cfg_attr(feature = "better-docs",
    doc(cfg(feature = "macros")),
)]
pub use ::thread_coro_proc_macros::coroutine_fn;
