//! Lifecycle surface every role exposes to its assembly.

/// One of View, Presenter or Interactor.
///
/// A role listens for its inbound messages through [`Listener`] and reaches
/// its neighbours only through its own outlets. The assembly uses this
/// trait to check the wiring and to tear the module down.
///
/// [`Listener`]: super::Listener
pub trait Role: Send + Sync {
    fn role_name(&self) -> &'static str;

    /// Names of outlets that have not been connected yet.
    fn unwired_outlets(&self) -> Vec<&'static str>;

    /// Detach every outlet. Called once, during teardown.
    fn detach(&self);
}
