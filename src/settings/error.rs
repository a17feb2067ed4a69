use thiserror::Error;

/// Failures loading settings, carried to the view as messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The backing store or network could not serve the sections.
    #[error("{0}")]
    Unavailable(String),
}

impl SettingsError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }
}
