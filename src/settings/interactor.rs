use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::runtime::Handle;

use crate::context::ContextHandle;
use crate::dispatch::{Listener, Message, Outlet, Role};

use super::messages::{SettingsRequest, SettingsResponse};
use super::source::SectionSource;

/// Fetches settings sections and reports back to the presenter.
///
/// The source call runs on the tokio runtime; its outcome is queued on the
/// presentation context rather than dispatched from the runtime's task.
/// At most one source call is in flight; a `Fetch` while one is pending
/// only re-announces loading.
pub struct SettingsInteractor {
    source: Arc<dyn SectionSource>,
    context: ContextHandle,
    runtime: Handle,
    /// Set while a source call is pending, cleared on the context.
    in_flight: Arc<AtomicBool>,
    presenter: Outlet<SettingsResponse>,
}

impl SettingsInteractor {
    pub fn new(source: Arc<dyn SectionSource>, context: ContextHandle, runtime: Handle) -> Self {
        Self {
            source,
            context,
            runtime,
            in_flight: Arc::new(AtomicBool::new(false)),
            presenter: Outlet::new("presenter"),
        }
    }

    pub fn presenter_outlet(&self) -> &Outlet<SettingsResponse> {
        &self.presenter
    }

    fn fetch(&self) {
        self.presenter.dispatch(SettingsResponse::StartLoading);

        if self.in_flight.swap(true, Ordering::SeqCst) {
            tracing::debug!("Settings fetch already pending, joining it");
            return;
        }

        let in_flight = Arc::clone(&self.in_flight);
        let source = Arc::clone(&self.source);
        let presenter = self.presenter.bridge();
        let context = self.context.clone();
        self.runtime.spawn(async move {
            let response = match source.load_sections().await {
                Ok(sections) => SettingsResponse::PresentData(sections),
                Err(error) => {
                    tracing::debug!(%error, "Settings source failed");
                    SettingsResponse::Failed(error)
                }
            };
            let name = response.name();
            let queued = context.post(move || {
                in_flight.store(false, Ordering::SeqCst);
                presenter.dispatch(response);
            });
            if !queued {
                tracing::warn!(message = name, "Presentation context stopped, message dropped");
            }
        });
    }
}

impl Listener<SettingsRequest> for SettingsInteractor {
    fn dispatch(&self, request: SettingsRequest) {
        if self.presenter.is_detached() {
            tracing::trace!("Interactor torn down, request dropped");
            return;
        }
        match request {
            SettingsRequest::Fetch => self.fetch(),
        }
    }
}

impl Role for SettingsInteractor {
    fn role_name(&self) -> &'static str {
        "SettingsInteractor"
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
