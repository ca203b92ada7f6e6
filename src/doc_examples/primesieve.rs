// A concurrent prime sieve: every prime found so far filters the stream of
// candidates in its own coroutine.

use ::thread_coro::prelude::*;

fn counter (start: u64)
  -> Subroutine<(), u64>
{
    Coroutine::new_sub(move |(), co| {
        for i in start .. {
            co.yield_(i);
        }
    })
}

fn filter (p: u64, upstream: Subroutine<(), u64>)
  -> Subroutine<(), u64>
{
    Coroutine::new_sub(move |(), co| {
        for n in upstream {
            if n % p != 0 {
                co.yield_(n);
            }
        }
    })
}

fn primes ()
  -> Subroutine<(), u64>
{
    Coroutine::new_sub(|(), co| {
        let mut candidates = counter(2);
        // The stream never ends; stopping `primes` unwinds out of this loop,
        // and dropping `candidates` stops the whole chain of filters.
        while let Some(p) = candidates.next() {
            co.yield_(p);
            candidates = filter(p, candidates);
        }
    })
}

fn main ()
{
    let mut primes = primes();
    let first_15 = primes.by_ref().take(15).collect::<Vec<_>>();
    primes.stop();

    println!("{:?}", first_15);
    assert_eq!(
        first_15,
        [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47],
    );
}
