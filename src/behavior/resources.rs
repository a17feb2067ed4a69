//! Resources a composing role supplies to the behavior traits.
//!
//! The rendering behind each resource belongs to the host application.
//! Behavior traits only call these methods.

/// Busy indicator, e.g. a spinner.
pub trait ActivityIndicator: Send + Sync {
    fn start(&self);
    fn stop(&self);
    fn is_animating(&self) -> bool;
}

/// Sectioned table the view renders.
pub trait TableSurface: Send + Sync {
    /// Replace every section and redraw.
    fn reload(&self, sections: Vec<String>);
    fn sections(&self) -> Vec<String>;
}

/// Inline error presentation.
pub trait ErrorBanner: Send + Sync {
    fn present(&self, message: &str);
    fn dismiss(&self);
    fn message(&self) -> Option<String>;
}
