use std::sync::Arc;

use crate::behavior::{
    ActivityIndicator, ErrorBanner, ErrorDisplay, Loading, TableDisplay, TableSurface,
};
use crate::dispatch::{Listener, Outlet, Role};

use super::messages::{SettingsCommand, SettingsEvent};

/// Rendering resources the host application supplies to the view.
#[derive(Clone)]
pub struct SettingsSurfaces {
    pub indicator: Arc<dyn ActivityIndicator>,
    pub table: Arc<dyn TableSurface>,
    pub banner: Arc<dyn ErrorBanner>,
}

/// Settings screen. Composes loading, table and error behavior and owns
/// the presenter through its outlet.
pub struct SettingsView {
    surfaces: SettingsSurfaces,
    presenter: Outlet<SettingsEvent>,
}

impl SettingsView {
    pub fn new(surfaces: SettingsSurfaces) -> Self {
        Self {
            surfaces,
            presenter: Outlet::new("presenter"),
        }
    }

    pub fn presenter_outlet(&self) -> &Outlet<SettingsEvent> {
        &self.presenter
    }

    /// Screen appeared.
    pub fn load(&self) {
        self.presenter.dispatch(SettingsEvent::Load);
    }

    /// Pull-to-refresh or equivalent.
    pub fn refresh(&self) {
        self.presenter.dispatch(SettingsEvent::Refresh);
    }

    /// User closed the screen.
    pub fn close(&self) {
        self.presenter.dispatch(SettingsEvent::Dismiss);
    }

    /// Both `Loading` and `ErrorDisplay` define `dismiss`; the view runs
    /// both and empties the table.
    pub fn dismiss(&self) {
        Loading::dismiss(self);
        ErrorDisplay::dismiss(self);
        self.clear_table();
    }
}

impl Loading for SettingsView {
    fn activity_indicator(&self) -> &dyn ActivityIndicator {
        self.surfaces.indicator.as_ref()
    }
}

impl TableDisplay for SettingsView {
    fn table_surface(&self) -> &dyn TableSurface {
        self.surfaces.table.as_ref()
    }
}

impl ErrorDisplay for SettingsView {
    fn error_banner(&self) -> &dyn ErrorBanner {
        self.surfaces.banner.as_ref()
    }
}

impl Listener<SettingsCommand> for SettingsView {
    fn dispatch(&self, command: SettingsCommand) {
        if self.presenter.is_detached() {
            tracing::trace!(?command, "View torn down, command dropped");
            return;
        }
        match command {
            SettingsCommand::ShowLoading => {
                // A retry hides the previous failure
                ErrorDisplay::dismiss(self);
                self.show_loading();
            }
            SettingsCommand::DisplayTable(sections) => {
                self.hide_loading();
                self.display_table(sections);
            }
            SettingsCommand::ShowError(message) => {
                self.hide_loading();
                self.show_error(&message);
            }
            SettingsCommand::Dismiss => self.dismiss(),
        }
    }
}

impl Role for SettingsView {
    fn role_name(&self) -> &'static str {
        "SettingsView"
    }

    fn unwired_outlets(&self) -> Vec<&'static str> {
        if self.presenter.is_wired() {
            Vec::new()
        } else {
            vec![self.presenter.name()]
        }
    }

    fn detach(&self) {
        self.presenter.detach();
    }
}
