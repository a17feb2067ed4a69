//! Composable behavior traits for roles.
//!
//! Each trait asks the composing role for one resource accessor and
//! provides default operations written only against that accessor. A role
//! picks the traits it needs; composing a trait says nothing about any
//! other role composing the same one.
//!
//! # Overlapping operations
//!
//! [`Loading`] and [`ErrorDisplay`] both define `dismiss`. A role composing
//! both cannot call `dismiss` with method syntax until it declares its own:
//!
//! ```compile_fail
//! use triad::behavior::{ActivityIndicator, ErrorBanner, ErrorDisplay, Loading};
//!
//! struct Panel {
//!     indicator: Box<dyn ActivityIndicator>,
//!     banner: Box<dyn ErrorBanner>,
//! }
//!
//! impl Loading for Panel {
//!     fn activity_indicator(&self) -> &dyn ActivityIndicator {
//!         self.indicator.as_ref()
//!     }
//! }
//!
//! impl ErrorDisplay for Panel {
//!     fn error_banner(&self) -> &dyn ErrorBanner {
//!         self.banner.as_ref()
//!     }
//! }
//!
//! fn close(panel: &Panel) {
//!     panel.dismiss(); // error[E0034]: multiple applicable items in scope
//! }
//! ```
//!
//! The fix is an inherent `dismiss` on the role that says which defaults
//! run, e.g. `Loading::dismiss(self); ErrorDisplay::dismiss(self);`.

mod error_display;
mod loading;
mod resources;
mod table;

pub use error_display::ErrorDisplay;
pub use loading::Loading;
pub use resources::{ActivityIndicator, ErrorBanner, TableSurface};
pub use table::TableDisplay;
