/// Presenter-side state of the settings screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SettingsState {
    #[default]
    Idle,
    Loading,
    Loaded {
        sections: Vec<String>,
    },
    Failed {
        message: String,
    },
}

impl SettingsState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// True once content or an error has been shown.
    pub fn has_settled(&self) -> bool {
        matches!(self, Self::Loaded { .. } | Self::Failed { .. })
    }
}
