use crate::core::{
    cmd::Cmd,
    msg::Msg,
    state::AppState,
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // Session messages (delegated to SessionState)
        Msg::Session(session_msg) => {
            let commands = state.session.update(session_msg);
            // A confirmed exit also stops the runner loop
            if commands.iter().any(|cmd| matches!(cmd, Cmd::ExitApp)) {
                state.system.should_quit = true;
            }
            (state, commands)
        }

        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::{
        cmd::SurfaceCommand,
        msg::{session::SessionMsg, system::SystemMsg},
        state::Phase,
    };

    #[test]
    fn test_update_quit() {
        let state = AppState::default();

        let (new_state, cmds) = update(Msg::System(SystemMsg::Quit), state);

        assert!(new_state.system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_update_http_error_scenario() {
        // Load starts, then the server answers 503
        let state = AppState::default();
        let (state, _) = update(Msg::Session(SessionMsg::LoadStarted), state);
        assert_eq!(state.session.phase, Phase::Loading);

        let (state, cmds) = update(
            Msg::Session(SessionMsg::HttpErrorReceived {
                status: 503,
                message: "Service Unavailable".to_string(),
            }),
            state,
        );

        assert_eq!(state.session.phase, Phase::Error);
        let error = state.session.error.as_ref().expect("error fields set");
        assert_eq!(error.title, "Unable to Load Page");
        assert!(error.detail.contains("HTTP 503"));
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_update_offline_error_scenario() {
        let state = AppState::default();

        let (state, _) = update(
            Msg::Session(SessionMsg::LoadFailed(
                "net::ERR_INTERNET_DISCONNECTED".to_string(),
            )),
            state,
        );

        let error = state.session.error.as_ref().expect("error fields set");
        assert_eq!(error.title, "No Internet Connection");
    }

    #[test]
    fn test_update_successful_load_scenario() {
        let state = AppState::default();

        let (state, _) = update(
            Msg::Session(SessionMsg::NavigationChanged {
                can_go_back: true,
                is_loading: false,
            }),
            state,
        );
        let (state, cmds) = update(Msg::Session(SessionMsg::LoadFinished), state);

        assert_eq!(state.session.phase, Phase::Ready);
        assert!(state.session.can_go_back);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_update_retry_from_error() {
        let state = AppState::default();
        let (state, _) = update(
            Msg::Session(SessionMsg::LoadFailed("ssl error".to_string())),
            state,
        );

        let (state, cmds) = update(Msg::Session(SessionMsg::RetryRequested), state);

        assert_eq!(state.session.phase, Phase::Loading);
        assert!(state.session.error.is_none());
        assert_eq!(cmds, vec![Cmd::Surface(SurfaceCommand::Reload)]);
    }

    #[test]
    fn test_update_confirmed_exit_sets_should_quit() {
        let state = AppState::default();

        let (state, first) = update(Msg::Session(SessionMsg::BackRequested { at_ms: 100 }), state);
        assert!(first.is_empty());
        assert!(!state.system.should_quit);

        let (state, second) = update(Msg::Session(SessionMsg::BackRequested { at_ms: 900 }), state);

        assert_eq!(second, vec![Cmd::ExitApp]);
        assert!(state.system.should_quit);
    }

    #[test]
    fn test_update_status_message() {
        let state = AppState::default();

        let (state, cmds) = update(
            Msg::System(SystemMsg::UpdateStatusMessage("Blocked navigation".to_string())),
            state,
        );

        assert_eq!(
            state.system.status_message,
            Some("Blocked navigation".to_string())
        );
        assert!(cmds.is_empty());
    }
}
