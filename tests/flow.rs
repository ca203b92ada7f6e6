use {
    ::core::ops::Not as _,
    ::proptest::prelude::*,
    ::std::sync::{Arc, Mutex},
    ::thread_coro::prelude::*,
};

#[derive(Clone, Default)]
struct Log(Arc<Mutex<Vec<String>>>);

impl Log {
    fn push (self: &'_ Self, line: impl Into<String>)
    {
        self.0.lock().unwrap().push(line.into());
    }

    fn lines (self: &'_ Self)
      -> Vec<String>
    {
        self.0.lock().unwrap().clone()
    }
}

/// Both sides log into the same list: since only one of them runs at a time,
/// the lines come out in a deterministic, interleaved order.
#[test]
fn control_flow_interleaves ()
{
    let log = Log::default();

    log.push("coro creation enter");
    let mut coroutine = Coroutine::<&str, i32>::new({
        let log = log.clone();
        move |mut v, co| {
            log.push(format!("generator enter s={}", v));
            for i in 1 .. 4 {
                log.push(format!("generator send enter s={}", i));
                v = co.yield_(i);
                log.push(format!("generator send leave s={},r={}", i, v));
            }
            log.push(format!("generator leave s={}", 4));
            4
        }
    });
    log.push("coro creation leave");

    log.push("consuming enter");
    let mut received = vec![];
    for &s in &["a", "b", "c", "d", "e"] {
        log.push(format!("resume coro enter s={}", s));
        let v = coroutine.resume(s).map(CoroutineState::into_inner);
        log.push(format!("resume coro leave s={},v={}", s, v.unwrap_or(0)));
        match v {
            | Some(v) => received.push(v),
            | None => break,
        }
    }
    log.push("consuming leave");
    coroutine.stop();

    assert_eq!(received, [1, 2, 3, 4]);
    assert_eq!(log.lines(), [
        "coro creation enter",
        "coro creation leave",
        "consuming enter",
        "resume coro enter s=a",
        "generator enter s=a",
        "generator send enter s=1",
        "resume coro leave s=a,v=1",
        "resume coro enter s=b",
        "generator send leave s=1,r=b",
        "generator send enter s=2",
        "resume coro leave s=b,v=2",
        "resume coro enter s=c",
        "generator send leave s=2,r=c",
        "generator send enter s=3",
        "resume coro leave s=c,v=3",
        "resume coro enter s=d",
        "generator send leave s=3,r=d",
        "generator leave s=4",
        "resume coro leave s=d,v=4",
        "resume coro enter s=e",
        "resume coro leave s=e,v=0",
        "consuming leave",
    ]);
}

#[test]
fn resume_argument_round_trip ()
{
    let mut echo = Subroutine::<String, String>::new_sub(|mut s, co| {
        while s.is_empty().not() {
            s = co.yield_(s.to_uppercase());
        }
    });
    assert_eq!(echo.resume("ab".into()), Some(CoroutineState::Yielded("AB".into())));
    assert_eq!(echo.resume("cd".into()), Some(CoroutineState::Yielded("CD".into())));
    assert_eq!(echo.resume(String::new()), Some(CoroutineState::Returned(())));
    assert_eq!(echo.resume("ef".into()), None);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// A body yielding `k` values takes `k + 1` resumes to complete, and
    /// every resume past that is `None`.
    #[test]
    fn k_yields_take_k_plus_one_resumes (
        values in prop::collection::vec(any::<u16>(), 0 .. 16),
    )
    {
        let expected_sum: u64 = values.iter().map(|&v| u64::from(v)).sum();
        let k = values.len();
        let mut coroutine = Coroutine::<(), u16, u64>::new(move |(), co| {
            let mut sum = 0;
            for v in values {
                co.yield_(v);
                sum += u64::from(v);
            }
            sum
        });

        let mut yielded = 0;
        let returned = loop {
            match coroutine.resume(()) {
                | Some(CoroutineState::Yielded(_)) => yielded += 1,
                | Some(CoroutineState::Returned(sum)) => break sum,
                | None => panic!("finished without returning"),
            }
        };
        prop_assert_eq!(yielded, k);
        prop_assert_eq!(returned, expected_sum);
        prop_assert_eq!(coroutine.phase(), Phase::Completed);
        prop_assert_eq!(coroutine.resume(()), None);
    }
}
