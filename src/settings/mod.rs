//! Settings screen module.
//!
//! A complete triad used as the reference module: the view asks for the
//! settings sections, the interactor loads them from a [`SectionSource`],
//! and the presenter turns the outcome into view commands.
//!
//! # Layout
//!
//! - `messages.rs` - Event, Request, Response and Command enums
//! - `state.rs` - Presenter state (Idle → Loading → Loaded | Failed)
//! - `reducer.rs` - Presenter transitions (pure, no side effects)
//! - `view.rs`, `presenter.rs`, `interactor.rs` - the three roles
//! - `assembly.rs` - builds and wires one instance

mod assembly;
mod error;
mod interactor;
mod messages;
mod presenter;
mod reducer;
mod source;
mod state;
mod view;

pub use assembly::{wire, SettingsAssembly, MODULE_NAME};
pub use error::SettingsError;
pub use interactor::SettingsInteractor;
pub use messages::{SettingsCommand, SettingsEvent, SettingsOutput, SettingsRequest, SettingsResponse};
pub use presenter::SettingsPresenter;
pub use reducer::SettingsReducer;
pub use source::{SectionSource, StaticSections};
pub use state::SettingsState;
pub use view::{SettingsSurfaces, SettingsView};
