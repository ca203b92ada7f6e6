//! Single-slot rendezvous channel used for each direction of a coroutine.
//!
//! A send only returns once the other side has taken the message, so the two
//! threads of a coroutine strictly alternate.

use ::std::sync::mpsc;

/// The other end of the channel is gone.
///
/// On a failed send, carries the message back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(in crate)
struct HungUp<T = ()> (
    pub(in crate) T,
);

pub(in crate)
fn channel<T> ()
  -> (Sender<T>, Receiver<T>)
{
    let (tx, rx) = mpsc::sync_channel(0);
    (Sender(tx), Receiver(rx))
}

pub(in crate)
struct Sender<T> (
    mpsc::SyncSender<T>,
);

impl<T> Sender<T> {
    /// Blocks until a `recv()` on the other side takes `msg`.
    pub(in crate)
    fn send (self: &'_ Self, msg: T)
      -> Result<(), HungUp<T>>
    {
        self.0
            .send(msg)
            .map_err(|mpsc::SendError(msg)| HungUp(msg))
    }
}

pub(in crate)
struct Receiver<T> (
    mpsc::Receiver<T>,
);

impl<T> Receiver<T> {
    /// Blocks until the other side sends.
    pub(in crate)
    fn recv (self: &'_ Self)
      -> Result<T, HungUp>
    {
        self.0
            .recv()
            .map_err(|mpsc::RecvError| HungUp(()))
    }
}
