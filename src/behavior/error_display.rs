use super::resources::ErrorBanner;

/// Roles that surface domain errors to the user.
pub trait ErrorDisplay {
    fn error_banner(&self) -> &dyn ErrorBanner;

    fn show_error(&self, message: &str) {
        self.error_banner().present(message);
    }

    /// Hide the banner if one is showing.
    fn dismiss(&self) {
        if self.error_banner().message().is_some() {
            self.error_banner().dismiss();
        }
    }

    fn displayed_error(&self) -> Option<String> {
        self.error_banner().message()
    }
}
