//! Outbound slot a role keeps for one neighbour.

use std::fmt;

use parking_lot::Mutex;

use super::bridge::Bridge;
use super::message::Message;
use crate::error::WiringError;

enum Slot<M: Message> {
    Unwired,
    Wired(Bridge<M>),
    Detached,
}

/// A role's outbound reference, with an explicit wiring lifecycle:
/// `Unwired → Wired → Detached`.
///
/// - Wired: dispatch forwards through the bridge.
/// - Detached (after teardown): dispatch is a silent no-op.
/// - Unwired: dispatch panics. The assembly forgot to connect it.
///
/// The slot lock is released before forwarding, so a listener may
/// dispatch back into the role that owns this outlet.
pub struct Outlet<M: Message> {
    name: &'static str,
    slot: Mutex<Slot<M>>,
}

impl<M: Message> Outlet<M> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            slot: Mutex::new(Slot::Unwired),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Wire the outlet. Each outlet is wired exactly once.
    pub fn connect(&self, bridge: Bridge<M>) -> Result<(), WiringError> {
        let mut slot = self.slot.lock();
        match *slot {
            Slot::Unwired => {
                *slot = Slot::Wired(bridge);
                Ok(())
            }
            Slot::Wired(_) => Err(WiringError::AlreadyWired { outlet: self.name }),
            Slot::Detached => Err(WiringError::Detached { outlet: self.name }),
        }
    }

    pub fn is_wired(&self) -> bool {
        matches!(*self.slot.lock(), Slot::Wired(_))
    }

    pub fn is_detached(&self) -> bool {
        matches!(*self.slot.lock(), Slot::Detached)
    }

    /// Clone of the wired bridge, for work that outlives the current call.
    ///
    /// Returns an absent bridge once detached.
    ///
    /// # Panics
    ///
    /// Panics if the outlet has not been wired yet.
    pub fn bridge(&self) -> Bridge<M> {
        match &*self.slot.lock() {
            Slot::Wired(bridge) => bridge.clone(),
            Slot::Unwired => panic!("outlet '{}' cloned before wiring", self.name),
            Slot::Detached => Bridge::absent(),
        }
    }

    /// Forward `message` through the wired bridge. A no-op once detached.
    ///
    /// # Panics
    ///
    /// Panics if the outlet has not been wired yet.
    pub fn dispatch(&self, message: M) {
        let bridge = match &*self.slot.lock() {
            Slot::Wired(bridge) => bridge.clone(),
            Slot::Unwired => panic!(
                "outlet '{}' dispatched {} before wiring",
                self.name,
                message.name()
            ),
            Slot::Detached => {
                tracing::trace!(
                    outlet = self.name,
                    message = message.name(),
                    "Outlet detached, message dropped"
                );
                return;
            }
        };
        bridge.dispatch(message);
    }

    /// Drop the bridge. An owning bridge releases its listener here.
    pub fn detach(&self) {
        let previous = std::mem::replace(&mut *self.slot.lock(), Slot::Detached);
        drop(previous);
    }
}

impl<M: Message> fmt::Debug for Outlet<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &*self.slot.lock() {
            Slot::Unwired => "unwired",
            Slot::Wired(_) => "wired",
            Slot::Detached => "detached",
        };
        f.debug_struct("Outlet")
            .field("name", &self.name)
            .field("state", &state)
            .finish()
    }
}
