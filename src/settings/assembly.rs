use std::sync::Arc;

use tokio::runtime::Handle;

use crate::assembly::{Assembly, ModuleHandle};
use crate::context::ContextHandle;
use crate::dispatch::{Bridge, Role};
use crate::error::WiringError;

use super::interactor::SettingsInteractor;
use super::presenter::SettingsPresenter;
use super::source::SectionSource;
use super::view::{SettingsSurfaces, SettingsView};

pub const MODULE_NAME: &str = "settings";

/// Builds settings modules.
pub struct SettingsAssembly {
    surfaces: SettingsSurfaces,
    source: Arc<dyn SectionSource>,
    runtime: Handle,
}

impl SettingsAssembly {
    pub fn new(surfaces: SettingsSurfaces, source: Arc<dyn SectionSource>, runtime: Handle) -> Self {
        Self {
            surfaces,
            source,
            runtime,
        }
    }
}

/// Connect the four outlets of a settings triad.
///
/// Downstream edges own their target, upstream edges observe it.
pub fn wire(
    view: &Arc<SettingsView>,
    presenter: &Arc<SettingsPresenter>,
    interactor: &Arc<SettingsInteractor>,
) -> Result<(), WiringError> {
    view.presenter_outlet()
        .connect(Bridge::owning(Arc::clone(presenter)))?;
    presenter.view_outlet().connect(Bridge::observing(view))?;
    presenter
        .interactor_outlet()
        .connect(Bridge::owning(Arc::clone(interactor)))?;
    interactor
        .presenter_outlet()
        .connect(Bridge::observing(presenter))?;
    Ok(())
}

impl Assembly for SettingsAssembly {
    type View = SettingsView;

    fn assemble(&self, context: &ContextHandle) -> Result<ModuleHandle<SettingsView>, WiringError> {
        let view = Arc::new(SettingsView::new(self.surfaces.clone()));
        let presenter = Arc::new(SettingsPresenter::new());
        let interactor = Arc::new(SettingsInteractor::new(
            Arc::clone(&self.source),
            context.clone(),
            self.runtime.clone(),
        ));

        wire(&view, &presenter, &interactor)?;

        ModuleHandle::seal(
            MODULE_NAME,
            view,
            vec![presenter as Arc<dyn Role>, interactor as Arc<dyn Role>],
        )
    }
}
