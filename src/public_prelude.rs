//! The crate prelude: reexport the most essential utilities so that blob
//! `use`-ing them should enable the most straight-forward usage.

pub use crate::{
    Builder,
    Coroutine,
    CoroutineState,
    Phase,
    Subroutine,
    Yielder,
};

#[cfg(feature = "macros")]
pub use ::thread_coro_proc_macros::coroutine_fn;
