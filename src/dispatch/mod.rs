//! Unidirectional dispatch primitives.
//!
//! # Architecture
//!
//! ```text
//! View ──Event──→ Presenter ──Request──→ Interactor
//!   ↑                 │  ↑                   │
//!   └────Command──────┘  └─────Response──────┘
//! ```
//!
//! - **Message**: closed enum per role edge
//! - **Listener**: the one dispatch operation a role implements
//! - **Bridge**: type-erased carrier for a concrete listener
//! - **Outlet**: a role's outbound slot with a wiring lifecycle
//! - **Reducer**: pure state transitions for the presenter

mod bridge;
mod listener;
mod message;
mod outlet;
mod reducer;
mod role;

pub use bridge::Bridge;
pub use listener::{FnListener, Listener};
pub use message::Message;
pub use outlet::Outlet;
pub use reducer::{Reducer, Transition};
pub use role::Role;
