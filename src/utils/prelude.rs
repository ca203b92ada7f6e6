pub(in crate)
use {
    ::core::{
        any::Any,
        cell::Cell,
        fmt,
        ops::Not as _,
        panic::AssertUnwindSafe,
    },
    ::std::{
        panic,
        sync::{
            Arc,
            Mutex,
            MutexGuard,
            PoisonError,
        },
        thread::{
            self,
            JoinHandle,
        },
    },
    ::log::{
        debug,
        error,
        trace,
    },
    crate::{
        boundary::{
            self,
            Cancelled,
        },
        builder::Builder,
        coroutine::{
            Command,
            Coroutine,
            Event,
        },
        error::{
            Error,
            Fault,
        },
        handoff::{
            self,
            HungUp,
        },
        record::{
            Phase,
            Record,
        },
        utils::Label,
        yielder::Yielder,
    },
};
