use crate::dispatch::Message;

use super::error::SettingsError;

/// View → Presenter.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsEvent {
    /// Screen appeared.
    Load,
    /// User asked to reload already shown content.
    Refresh,
    /// User closed the screen.
    Dismiss,
}

impl Message for SettingsEvent {
    const VARIANTS: &'static [&'static str] = &["Load", "Refresh", "Dismiss"];

    fn name(&self) -> &'static str {
        match self {
            SettingsEvent::Load => "Load",
            SettingsEvent::Refresh => "Refresh",
            SettingsEvent::Dismiss => "Dismiss",
        }
    }
}

/// Presenter → Interactor.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsRequest {
    Fetch,
}

impl Message for SettingsRequest {
    const VARIANTS: &'static [&'static str] = &["Fetch"];

    fn name(&self) -> &'static str {
        match self {
            SettingsRequest::Fetch => "Fetch",
        }
    }
}

/// Interactor → Presenter.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsResponse {
    StartLoading,
    PresentData(Vec<String>),
    Failed(SettingsError),
}

impl Message for SettingsResponse {
    const VARIANTS: &'static [&'static str] = &["StartLoading", "PresentData", "Failed"];

    fn name(&self) -> &'static str {
        match self {
            SettingsResponse::StartLoading => "StartLoading",
            SettingsResponse::PresentData(_) => "PresentData",
            SettingsResponse::Failed(_) => "Failed",
        }
    }
}

/// Presenter → View.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsCommand {
    ShowLoading,
    DisplayTable(Vec<String>),
    ShowError(String),
    /// Clear everything the screen shows.
    Dismiss,
}

impl Message for SettingsCommand {
    const VARIANTS: &'static [&'static str] = &["ShowLoading", "DisplayTable", "ShowError", "Dismiss"];

    fn name(&self) -> &'static str {
        match self {
            SettingsCommand::ShowLoading => "ShowLoading",
            SettingsCommand::DisplayTable(_) => "DisplayTable",
            SettingsCommand::ShowError(_) => "ShowError",
            SettingsCommand::Dismiss => "Dismiss",
        }
    }
}

/// Everything the settings presenter can emit, routed by outlet.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsOutput {
    Command(SettingsCommand),
    Request(SettingsRequest),
}
