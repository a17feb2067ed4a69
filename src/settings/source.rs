use async_trait::async_trait;

use super::error::SettingsError;

/// Where the settings interactor gets its sections from.
///
/// This is the one place the module may suspend; implementations talk to
/// storage or the network.
#[async_trait]
pub trait SectionSource: Send + Sync {
    async fn load_sections(&self) -> Result<Vec<String>, SettingsError>;
}

/// Source with a fixed answer.
#[derive(Debug, Clone)]
pub struct StaticSections {
    result: Result<Vec<String>, SettingsError>,
}

impl StaticSections {
    pub fn new(sections: Vec<String>) -> Self {
        Self {
            result: Ok(sections),
        }
    }

    pub fn failing(error: SettingsError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl SectionSource for StaticSections {
    async fn load_sections(&self) -> Result<Vec<String>, SettingsError> {
        self.result.clone()
    }
}
