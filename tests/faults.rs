use {
    ::std::panic::{self, AssertUnwindSafe},
    ::thread_coro::{prelude::*, Error, Fault},
};

/// Yields `13`, then panics with `"yikes!"` whichever way it is resumed.
fn yikes ()
  -> Subroutine<(), i32>
{
    Coroutine::new_sub(|(), co| {
        let _ = panic::catch_unwind(AssertUnwindSafe(|| co.yield_(13)));
        panic!("yikes!");
    })
}

fn panic_message (f: impl FnOnce())
  -> Option<String>
{
    let payload = panic::catch_unwind(AssertUnwindSafe(f)).err()?;
    payload
        .downcast_ref::<&str>()
        .map(|&s| s.to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
}

#[test]
fn propagates_through_resume ()
{
    let mut coroutine = yikes();
    assert_eq!(coroutine.resume(()), Some(CoroutineState::Yielded(13)));
    assert_eq!(
        panic_message(|| { coroutine.resume(()); }).as_deref(),
        Some("yikes!"),
    );
    assert_eq!(coroutine.phase(), Phase::Failed);
}

#[test]
fn propagates_through_stop ()
{
    let mut coroutine = yikes();
    assert_eq!(coroutine.resume(()), Some(CoroutineState::Yielded(13)));
    assert_eq!(
        panic_message(|| coroutine.stop()).as_deref(),
        Some("yikes!"),
    );
    assert_eq!(coroutine.phase(), Phase::Failed);
}

#[test]
fn delivered_exactly_once ()
{
    let mut coroutine = yikes();
    coroutine.resume(());
    assert!(panic_message(|| { coroutine.resume(()); }).is_some());
    assert_eq!(panic_message(|| { coroutine.resume(()); }), None);
    assert_eq!(panic_message(|| coroutine.stop()), None);
    assert_eq!(coroutine.resume(()), None);
    assert!(coroutine.is_finished());
}

#[test]
fn try_stop_returns_the_fault ()
{
    let mut coroutine = yikes();
    coroutine.resume(());
    let fault: Fault = coroutine.try_stop().unwrap_err();
    assert_eq!(fault.message(), Some("yikes!"));
    assert_eq!(fault.to_string(), "coroutine body panicked: yikes!");
    assert!(coroutine.try_stop().is_ok());
}

#[test]
fn non_string_payloads_survive ()
{
    #[derive(Debug, PartialEq)]
    struct Custom(u8);

    let mut coroutine = Coroutine::<(), u8>::new(|(), _| {
        panic::panic_any(Custom(7))
    });
    let payload =
        panic::catch_unwind(AssertUnwindSafe(|| coroutine.resume(())))
            .unwrap_err()
    ;
    assert_eq!(payload.downcast_ref::<Custom>(), Some(&Custom(7)));
}

#[test]
fn converts_into_error ()
{
    fn drive (coroutine: &mut Coroutine<u8, u8>)
      -> Result<Vec<u8>, Error>
    {
        let mut out = vec![];
        for n in 1 ..= 3 {
            match coroutine.try_resume(n)? {
                | Some(state) => out.push(state.into_inner()),
                | None => break,
            }
        }
        Ok(out)
    }

    let mut coroutine = Coroutine::<u8, u8>::new(|n, co| {
        let n = co.yield_(n * 2);
        if n > 1 {
            panic!("too big: {}", n);
        }
        n
    });
    match drive(&mut coroutine) {
        | Err(Error::Panicked(fault)) => {
            assert_eq!(fault.message(), Some("too big: 2"));
        },
        | other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn panic_in_a_never_started_body_is_delivered_to_stop ()
{
    struct Bomb;

    impl Drop for Bomb {
        fn drop (self: &'_ mut Self)
        {
            panic!("defused too late");
        }
    }

    let mut coroutine = Subroutine::<(), ()>::new_sub({
        let bomb = Bomb;
        move |(), _| drop(bomb)
    });
    let fault = coroutine.try_stop().unwrap_err();
    assert_eq!(fault.message(), Some("defused too late"));
    assert_eq!(coroutine.phase(), Phase::Failed);
}
