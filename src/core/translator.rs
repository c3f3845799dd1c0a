use crate::{
    core::{
        msg::{session::SessionMsg, system::SystemMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::gesture::is_back_swipe,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // Lifecycle reports - direct mapping
        RawMsg::LoadStart => vec![Msg::Session(SessionMsg::LoadStarted)],
        RawMsg::LoadEnd => vec![Msg::Session(SessionMsg::LoadFinished)],
        RawMsg::NavigationState {
            can_go_back,
            is_loading,
        } => vec![Msg::Session(SessionMsg::NavigationChanged {
            can_go_back,
            is_loading,
        })],
        RawMsg::LoadError(message) => vec![Msg::Session(SessionMsg::LoadFailed(message))],
        RawMsg::HttpError { status, message } => {
            vec![Msg::Session(SessionMsg::HttpErrorReceived {
                status,
                message,
            })]
        }
        RawMsg::PageHistory(len) => vec![Msg::Session(SessionMsg::PageHistoryReported(len))],

        // Navigation requests - origin containment
        RawMsg::NavigationRequest(url) => translate_navigation_request(url, state),
        RawMsg::OpenWindow(url) => vec![Msg::Session(SessionMsg::OpenWindowRequested(url))],

        // User input
        RawMsg::BackPressed { at_ms } => vec![Msg::Session(SessionMsg::BackRequested { at_ms })],
        RawMsg::SwipeEnded { dx, dy } => translate_swipe(dx, dy),
        RawMsg::RetryPressed => vec![Msg::Session(SessionMsg::RetryRequested)],

        // Host events
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent host events in the domain layer
        RawMsg::Tick => vec![],
    }
}

/// Top-level navigation is answered by the origin policy. Denials surface
/// as a status line entry; the synchronous engine hook is
/// `Runtime::should_allow_navigation`, which consults the same policy.
fn translate_navigation_request(url: String, state: &AppState) -> Vec<Msg> {
    if state.origin_policy().allows(&url) {
        return vec![];
    }
    vec![Msg::System(SystemMsg::UpdateStatusMessage(format!(
        "Blocked navigation to {url}"
    )))]
}

/// A recognized back swipe maps to the same go-back action as the hardware
/// back press rule 1; the canGoBack gate lives in the reducer.
fn translate_swipe(dx: f32, dy: f32) -> Vec<Msg> {
    if is_back_swipe(dx, dy) {
        vec![Msg::Session(SessionMsg::GoBackRequested)]
    } else {
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::infrastructure::config::Config;

    fn create_test_state() -> AppState {
        AppState::new_with_config(Config {
            start_url: "https://app.example.com/".to_string(),
            allowed_origin: "https://app.example.com".to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_lifecycle_events_map_directly() {
        let state = create_test_state();

        assert_eq!(
            translate_raw_to_domain(RawMsg::LoadStart, &state),
            vec![Msg::Session(SessionMsg::LoadStarted)]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::LoadEnd, &state),
            vec![Msg::Session(SessionMsg::LoadFinished)]
        );
        assert_eq!(
            translate_raw_to_domain(
                RawMsg::NavigationState {
                    can_go_back: true,
                    is_loading: false
                },
                &state
            ),
            vec![Msg::Session(SessionMsg::NavigationChanged {
                can_go_back: true,
                is_loading: false
            })]
        );
    }

    #[test]
    fn test_error_events_carry_messages() {
        let state = create_test_state();

        assert_eq!(
            translate_raw_to_domain(RawMsg::LoadError("timed out".to_string()), &state),
            vec![Msg::Session(SessionMsg::LoadFailed("timed out".to_string()))]
        );
        assert_eq!(
            translate_raw_to_domain(
                RawMsg::HttpError {
                    status: 404,
                    message: "Not Found".to_string()
                },
                &state
            ),
            vec![Msg::Session(SessionMsg::HttpErrorReceived {
                status: 404,
                message: "Not Found".to_string()
            })]
        );
    }

    #[test]
    fn test_allowed_navigation_request_is_silent() {
        let state = create_test_state();

        let msgs = translate_raw_to_domain(
            RawMsg::NavigationRequest("https://app.example.com/settings".to_string()),
            &state,
        );

        assert!(msgs.is_empty());
    }

    #[test]
    fn test_blocked_navigation_request_updates_status() {
        let state = create_test_state();

        let msgs = translate_raw_to_domain(
            RawMsg::NavigationRequest("https://evil.example.com/".to_string()),
            &state,
        );

        assert_eq!(
            msgs,
            vec![Msg::System(SystemMsg::UpdateStatusMessage(
                "Blocked navigation to https://evil.example.com/".to_string()
            ))]
        );
    }

    #[test]
    fn test_open_window_becomes_in_place_navigation() {
        let state = create_test_state();

        let msgs = translate_raw_to_domain(
            RawMsg::OpenWindow("https://app.example.com/help".to_string()),
            &state,
        );

        assert_eq!(
            msgs,
            vec![Msg::Session(SessionMsg::OpenWindowRequested(
                "https://app.example.com/help".to_string()
            ))]
        );
    }

    #[test]
    fn test_back_swipe_is_recognized() {
        let state = create_test_state();

        let msgs = translate_raw_to_domain(RawMsg::SwipeEnded { dx: -80.0, dy: 10.0 }, &state);

        assert_eq!(msgs, vec![Msg::Session(SessionMsg::GoBackRequested)]);
    }

    #[test]
    fn test_other_swipes_are_ignored() {
        let state = create_test_state();

        assert!(translate_raw_to_domain(RawMsg::SwipeEnded { dx: -20.0, dy: 0.0 }, &state).is_empty());
        assert!(
            translate_raw_to_domain(RawMsg::SwipeEnded { dx: -80.0, dy: 120.0 }, &state).is_empty()
        );
        assert!(translate_raw_to_domain(RawMsg::SwipeEnded { dx: 80.0, dy: 0.0 }, &state).is_empty());
    }

    #[test]
    fn test_tick_is_dropped() {
        let state = create_test_state();
        assert!(translate_raw_to_domain(RawMsg::Tick, &state).is_empty());
    }

    #[test]
    fn test_translation_is_deterministic() {
        let state = create_test_state();
        let raw = RawMsg::BackPressed { at_ms: 1234 };

        assert_eq!(
            translate_raw_to_domain(raw.clone(), &state),
            translate_raw_to_domain(raw, &state)
        );
    }
}
