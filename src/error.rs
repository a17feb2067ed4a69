//! Wiring errors.
//!
//! These are programmer errors found while a module is being assembled.
//! Domain failures never show up here; they travel as message variants.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WiringError {
    /// A role was sealed into a module with an outlet nobody connected.
    #[error("{role}: outlet '{outlet}' was never wired")]
    Unwired {
        role: &'static str,
        outlet: &'static str,
    },

    /// `connect` was called on an outlet that already has a bridge.
    #[error("outlet '{outlet}' is already wired")]
    AlreadyWired { outlet: &'static str },

    /// `connect` was called after the module was torn down.
    #[error("outlet '{outlet}' was detached by teardown")]
    Detached { outlet: &'static str },
}
