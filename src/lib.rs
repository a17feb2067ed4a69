//! Typed, unidirectional message dispatch for View / Presenter / Interactor
//! modules.
//!
//! - [`dispatch`]: message, listener and bridge primitives
//! - [`behavior`]: composable default behavior for roles
//! - [`assembly`]: the assembly contract and module handle
//! - [`context`]: the presentation context all dispatch runs on
//! - [`settings`]: a complete reference module

pub mod assembly;
pub mod behavior;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod settings;
pub mod shutdown;

pub use assembly::{Assembly, ModuleHandle};
pub use context::{ContextHandle, PresentationContext};
pub use dispatch::{Bridge, Listener, Message, Outlet, Reducer, Role, Transition};
pub use error::WiringError;
