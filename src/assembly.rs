//! Assembly contract and the handle it returns.
//!
//! An assembly builds one module instance: it creates the View, Presenter
//! and Interactor in that order, wires their outlets, and seals the result
//! into a [`ModuleHandle`]. Navigation between modules stays with the host.

use std::sync::{Arc, Weak};

use crate::context::ContextHandle;
use crate::dispatch::Role;
use crate::error::WiringError;

/// Builds and wires one module instance.
pub trait Assembly {
    type View: Role + 'static;

    fn assemble(&self, context: &ContextHandle) -> Result<ModuleHandle<Self::View>, WiringError>;
}

/// Opaque handle to an assembled module.
///
/// Holds the only strong reference to the View; everything else is owned
/// down the chain from it. Dropping the handle tears the module down.
pub struct ModuleHandle<V: Role + 'static> {
    module: &'static str,
    view: Option<Arc<V>>,
    /// Non-view roles, in creation order.
    downstream: Vec<Weak<dyn Role>>,
}

impl<V: Role + 'static> ModuleHandle<V> {
    /// Check that every outlet of every role is wired and take ownership
    /// of the view.
    ///
    /// `downstream` lists the non-view roles in the order they were created.
    pub fn seal(
        module: &'static str,
        view: Arc<V>,
        downstream: Vec<Arc<dyn Role>>,
    ) -> Result<Self, WiringError> {
        check_wired(view.as_ref())?;
        for role in &downstream {
            check_wired(role.as_ref())?;
        }

        tracing::info!(module, roles = downstream.len() + 1, "Module assembled");
        Ok(Self {
            module,
            view: Some(view),
            downstream: downstream.iter().map(Arc::downgrade).collect(),
        })
    }

    pub fn module(&self) -> &'static str {
        self.module
    }

    /// The view, until teardown.
    pub fn view(&self) -> Option<&Arc<V>> {
        self.view.as_ref()
    }

    pub fn is_alive(&self) -> bool {
        self.view.is_some()
    }

    /// Detach every role, last created first, then release the view.
    ///
    /// Safe to call more than once.
    pub fn teardown(&mut self) {
        let Some(view) = self.view.take() else {
            return;
        };

        for role in self.downstream.drain(..).rev() {
            if let Some(role) = role.upgrade() {
                tracing::debug!(module = self.module, role = role.role_name(), "Detaching role");
                role.detach();
            }
        }
        tracing::debug!(module = self.module, role = view.role_name(), "Detaching role");
        view.detach();
        drop(view);

        tracing::info!(module = self.module, "Module torn down");
    }
}

impl<V: Role + 'static> Drop for ModuleHandle<V> {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn check_wired(role: &dyn Role) -> Result<(), WiringError> {
    match role.unwired_outlets().first() {
        Some(&outlet) => Err(WiringError::Unwired {
            role: role.role_name(),
            outlet,
        }),
        None => Ok(()),
    }
}
