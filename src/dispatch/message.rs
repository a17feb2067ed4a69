//! Base trait for messages exchanged between roles.

use std::fmt::Debug;

/// Marker trait for the closed message types a module declares.
///
/// Every module declares one enum per role edge:
/// - Event (View → Presenter)
/// - Request (Presenter → Interactor)
/// - Response (Interactor → Presenter)
/// - Command (Presenter → View)
///
/// Listeners match on these enums without a wildcard arm, so adding a
/// variant breaks the build until every dispatcher handles it.
pub trait Message: Debug + Send + 'static {
    /// Names of every variant, in declaration order.
    const VARIANTS: &'static [&'static str];

    /// Name of this variant, for tracing output.
    fn name(&self) -> &'static str;
}
