//! Pure state transitions for mediating roles.

use super::message::Message;

/// Result of reducing one inbound message: the next state plus the
/// messages to emit, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<S, O> {
    pub state: S,
    pub outputs: Vec<O>,
}

impl<S, O> Transition<S, O> {
    pub fn new(state: S, outputs: Vec<O>) -> Self {
        Self { state, outputs }
    }

    /// Local state change only, nothing emitted.
    pub fn stay(state: S) -> Self {
        Self {
            state,
            outputs: Vec::new(),
        }
    }

    /// Move to `state` and emit a single message.
    pub fn emit(state: S, output: O) -> Self {
        Self {
            state,
            outputs: vec![output],
        }
    }
}

/// Reducer transforms state based on inbound messages of type `I`.
///
/// The reducer is the only place where a presenter's state changes.
/// It must be a pure function: (State, I) -> (State, Outputs), so the
/// same state and message always produce the same emitted sequence.
///
/// A presenter listening to several message types implements this once
/// per type on the same reducer.
pub trait Reducer<I: Message> {
    /// The state type this reducer operates on.
    type State: Clone + PartialEq + Default + Send + 'static;

    /// What the reducer emits (usually an enum routing to one outlet each).
    type Output;

    fn reduce(state: Self::State, input: I) -> Transition<Self::State, Self::Output>;
}
