use parking_lot::Mutex;

use crate::dispatch::{Listener, Message, Outlet, Reducer, Role};

use super::messages::{SettingsCommand, SettingsEvent, SettingsOutput, SettingsRequest, SettingsResponse};
use super::reducer::SettingsReducer;
use super::state::SettingsState;

/// Mediates between the settings view and interactor.
///
/// Holds a non-owning outlet to the view and an owning outlet to the
/// interactor.
pub struct SettingsPresenter {
    state: Mutex<SettingsState>,
    view: Outlet<SettingsCommand>,
    interactor: Outlet<SettingsRequest>,
}

impl SettingsPresenter {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(SettingsState::default()),
            view: Outlet::new("view"),
            interactor: Outlet::new("interactor"),
        }
    }

    pub fn view_outlet(&self) -> &Outlet<SettingsCommand> {
        &self.view
    }

    pub fn interactor_outlet(&self) -> &Outlet<SettingsRequest> {
        &self.interactor
    }

    pub fn state(&self) -> SettingsState {
        self.state.lock().clone()
    }

    /// Reduce, store the new state, then emit. The state lock is released
    /// before anything is emitted.
    fn apply<I>(&self, input: I)
    where
        I: Message,
        SettingsReducer: Reducer<I, State = SettingsState, Output = SettingsOutput>,
    {
        if self.view.is_detached() {
            tracing::trace!(message = input.name(), "Presenter torn down, message dropped");
            return;
        }

        let name = input.name();
        let outputs = {
            let mut state = self.state.lock();
            let transition =
                <SettingsReducer as Reducer<I>>::reduce(std::mem::take(&mut *state), input);
            *state = transition.state;
            transition.outputs
        };
        tracing::debug!(message = name, outputs = outputs.len(), "Settings presenter reduced");

        for output in outputs {
            match output {
                SettingsOutput::Command(command) => self.view.dispatch(command),
                SettingsOutput::Request(request) => self.interactor.dispatch(request),
            }
        }
    }
}

impl Default for SettingsPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Listener<SettingsEvent> for SettingsPresenter {
    fn dispatch(&self, event: SettingsEvent) {
        self.apply(event);
    }
}

impl Listener<SettingsResponse> for SettingsPresenter {
    fn dispatch(&self, response: SettingsResponse) {
        self.apply(response);
    }
}

impl Role for SettingsPresenter {
    fn role_name(&self) -> &'static str {
        "SettingsPresenter"
    }

    fn unwired_outlets(&self) -> Vec<&'static str> {
        let mut unwired = Vec::new();
        if !self.view.is_wired() {
            unwired.push(self.view.name());
        }
        if !self.interactor.is_wired() {
            unwired.push(self.interactor.name());
        }
        unwired
    }

    fn detach(&self) {
        self.interactor.detach();
        self.view.detach();
    }
}
