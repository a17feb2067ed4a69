//! The single dispatch contract every role implements.

use std::fmt;
use std::marker::PhantomData;

use super::message::Message;

/// Capability to synchronously react to messages of type `M`.
///
/// Implementations must be total over `M` and must not fail for a
/// well-formed message. A reaction that cannot complete is reported by
/// emitting another message (an error variant), not by panicking.
pub trait Listener<M: Message>: Send + Sync {
    fn dispatch(&self, message: M);
}

/// Listener backed by a closure.
pub struct FnListener<M, F> {
    handler: F,
    _message: PhantomData<fn(M)>,
}

impl<M, F> FnListener<M, F>
where
    M: Message,
    F: Fn(M) + Send + Sync,
{
    pub fn new(handler: F) -> Self {
        Self {
            handler,
            _message: PhantomData,
        }
    }
}

impl<M, F> Listener<M> for FnListener<M, F>
where
    M: Message,
    F: Fn(M) + Send + Sync,
{
    fn dispatch(&self, message: M) {
        (self.handler)(message)
    }
}

impl<M, F> fmt::Debug for FnListener<M, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnListener").finish_non_exhaustive()
    }
}
