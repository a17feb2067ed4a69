//! Reducer for the settings presenter.

use crate::dispatch::{Reducer, Transition};

use super::messages::{SettingsCommand, SettingsEvent, SettingsOutput, SettingsRequest, SettingsResponse};
use super::state::SettingsState;

/// Pure transitions for the settings presenter.
///
/// All emission (to the view or the interactor) happens in the presenter
/// after the new state is stored.
pub struct SettingsReducer;

fn fetch() -> SettingsOutput {
    SettingsOutput::Request(SettingsRequest::Fetch)
}

fn command(command: SettingsCommand) -> SettingsOutput {
    SettingsOutput::Command(command)
}

impl Reducer<SettingsEvent> for SettingsReducer {
    type State = SettingsState;
    type Output = SettingsOutput;

    fn reduce(state: Self::State, event: SettingsEvent) -> Transition<Self::State, Self::Output> {
        match event {
            SettingsEvent::Load => match state {
                // A fetch is already in flight
                SettingsState::Loading => Transition::stay(state),
                other => Transition::emit(other, fetch()),
            },
            SettingsEvent::Refresh => {
                if state.has_settled() {
                    Transition::emit(state, fetch())
                } else {
                    // Nothing shown yet; Load is the entry point
                    Transition::stay(state)
                }
            }
            SettingsEvent::Dismiss => {
                Transition::emit(SettingsState::Idle, command(SettingsCommand::Dismiss))
            }
        }
    }
}

impl Reducer<SettingsResponse> for SettingsReducer {
    type State = SettingsState;
    type Output = SettingsOutput;

    fn reduce(state: Self::State, response: SettingsResponse) -> Transition<Self::State, Self::Output> {
        match response {
            SettingsResponse::StartLoading => {
                Transition::emit(SettingsState::Loading, command(SettingsCommand::ShowLoading))
            }
            // Outcomes only land while a fetch is pending; after Dismiss
            // the screen stays closed.
            SettingsResponse::PresentData(_) | SettingsResponse::Failed(_) if !state.is_loading() => {
                Transition::stay(state)
            }
            SettingsResponse::PresentData(sections) => Transition::emit(
                SettingsState::Loaded {
                    sections: sections.clone(),
                },
                command(SettingsCommand::DisplayTable(sections)),
            ),
            SettingsResponse::Failed(error) => {
                let message = error.to_string();
                Transition::emit(
                    SettingsState::Failed {
                        message: message.clone(),
                    },
                    command(SettingsCommand::ShowError(message)),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SettingsError;

    fn loaded() -> SettingsState {
        SettingsState::Loaded {
            sections: vec!["General".to_string()],
        }
    }

    #[test]
    fn load_from_idle_requests_fetch() {
        let t = SettingsReducer::reduce(SettingsState::Idle, SettingsEvent::Load);
        assert_eq!(t.state, SettingsState::Idle);
        assert_eq!(t.outputs, vec![fetch()]);
    }

    #[test]
    fn load_while_loading_is_noop() {
        let t = SettingsReducer::reduce(SettingsState::Loading, SettingsEvent::Load);
        assert_eq!(t.state, SettingsState::Loading);
        assert!(t.outputs.is_empty());
    }

    #[test]
    fn refresh_only_after_settling() {
        let t = SettingsReducer::reduce(SettingsState::Idle, SettingsEvent::Refresh);
        assert!(t.outputs.is_empty());

        let t = SettingsReducer::reduce(loaded(), SettingsEvent::Refresh);
        assert_eq!(t.state, loaded());
        assert_eq!(t.outputs, vec![fetch()]);
    }

    #[test]
    fn dismiss_resets_state() {
        let t = SettingsReducer::reduce(loaded(), SettingsEvent::Dismiss);
        assert_eq!(t.state, SettingsState::Idle);
        assert_eq!(t.outputs, vec![command(SettingsCommand::Dismiss)]);
    }

    #[test]
    fn start_loading_shows_indicator() {
        let t = SettingsReducer::reduce(SettingsState::Idle, SettingsResponse::StartLoading);
        assert!(t.state.is_loading());
        assert_eq!(t.outputs, vec![command(SettingsCommand::ShowLoading)]);
    }

    #[test]
    fn load_after_settling_fetches_again() {
        let t = SettingsReducer::reduce(loaded(), SettingsEvent::Load);
        assert_eq!(t.state, loaded());
        assert_eq!(t.outputs, vec![fetch()]);

        let failed = SettingsState::Failed {
            message: "offline".to_string(),
        };
        let t = SettingsReducer::reduce(failed.clone(), SettingsEvent::Load);
        assert_eq!(t.state, failed);
        assert_eq!(t.outputs, vec![fetch()]);
    }

    #[test]
    fn refresh_while_loading_is_noop() {
        let t = SettingsReducer::reduce(SettingsState::Loading, SettingsEvent::Refresh);
        assert_eq!(t.state, SettingsState::Loading);
        assert!(t.outputs.is_empty());
    }

    #[test]
    fn outcome_after_dismiss_is_ignored() {
        let t = SettingsReducer::reduce(
            SettingsState::Idle,
            SettingsResponse::PresentData(vec!["General".to_string()]),
        );
        assert_eq!(t.state, SettingsState::Idle);
        assert!(t.outputs.is_empty());

        let t = SettingsReducer::reduce(
            SettingsState::Idle,
            SettingsResponse::Failed(SettingsError::unavailable("late")),
        );
        assert_eq!(t.state, SettingsState::Idle);
        assert!(t.outputs.is_empty());
    }

    #[test]
    fn data_while_loading_is_displayed() {
        let t = SettingsReducer::reduce(
            SettingsState::Loading,
            SettingsResponse::PresentData(vec!["General".to_string()]),
        );
        assert_eq!(t.state, loaded());
        assert_eq!(
            t.outputs,
            vec![command(SettingsCommand::DisplayTable(vec!["General".to_string()]))]
        );
    }

    #[test]
    fn failure_becomes_error_command() {
        let t = SettingsReducer::reduce(
            SettingsState::Loading,
            SettingsResponse::Failed(SettingsError::unavailable("network down")),
        );
        assert_eq!(
            t.state,
            SettingsState::Failed {
                message: "network down".to_string()
            }
        );
        assert_eq!(
            t.outputs,
            vec![command(SettingsCommand::ShowError("network down".to_string()))]
        );
    }
}
