use super::resources::ActivityIndicator;

/// Roles that can show a busy indicator.
pub trait Loading {
    fn activity_indicator(&self) -> &dyn ActivityIndicator;

    /// Start the indicator unless it is already running.
    fn show_loading(&self) {
        let indicator = self.activity_indicator();
        if !indicator.is_animating() {
            indicator.start();
        }
    }

    /// Stop the indicator if it is running.
    fn hide_loading(&self) {
        let indicator = self.activity_indicator();
        if indicator.is_animating() {
            indicator.stop();
        }
    }

    fn is_loading(&self) -> bool {
        self.activity_indicator().is_animating()
    }

    fn dismiss(&self) {
        self.hide_loading();
    }
}
