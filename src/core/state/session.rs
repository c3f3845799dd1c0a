use serde::{Deserialize, Serialize};
use strum::Display;

use crate::{
    core::cmd::{Cmd, SurfaceCommand, IN_PAGE_BACK_SCRIPT},
    core::msg::session::SessionMsg,
    domain::classify::{classify, LoadError},
};

/// Default exit-confirmation window for a second back press, in milliseconds.
pub const DEFAULT_BACK_EXIT_GRACE_MS: i64 = 2000;

/// Lifecycle phase of the embedded page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Loading,
    Ready,
    Error,
}

/// Session-related state: one per app launch, owned by the runtime.
///
/// `error` is `Some` exactly when `phase == Error`; both are mutated only
/// through `update`, so the pairing holds by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub phase: Phase,
    pub can_go_back: bool,
    pub error: Option<LoadError>,
    pub last_back_press_at: Option<i64>,
    /// Best-effort in-page history depth, when the engine reports one.
    pub page_history_len: Option<u32>,
    pub exit_grace_ms: i64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            phase: Phase::Loading,
            can_go_back: false,
            error: None,
            last_back_press_at: None,
            page_history_len: None,
            exit_grace_ms: DEFAULT_BACK_EXIT_GRACE_MS,
        }
    }
}

impl SessionState {
    pub fn with_exit_grace_ms(exit_grace_ms: i64) -> Self {
        Self {
            exit_grace_ms,
            ..Self::default()
        }
    }

    pub fn has_error(&self) -> bool {
        self.phase == Phase::Error
    }

    /// Session-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SessionMsg) -> Vec<Cmd> {
        match msg {
            SessionMsg::LoadStarted => {
                self.phase = Phase::Loading;
                self.error = None;
                vec![]
            }

            SessionMsg::NavigationChanged {
                can_go_back,
                is_loading,
            } => {
                // canGoBack mirrors the latest report, never inferred
                self.can_go_back = can_go_back;
                if !is_loading {
                    self.phase = Phase::Ready;
                    self.error = None;
                } else if self.phase != Phase::Error {
                    // A sticky error survives in-flight progress reports
                    self.phase = Phase::Loading;
                }
                vec![]
            }

            SessionMsg::LoadFinished => {
                if self.phase == Phase::Loading {
                    self.phase = Phase::Ready;
                }
                vec![]
            }

            SessionMsg::LoadFailed(raw) => self.fail(&raw),

            SessionMsg::HttpErrorReceived { status, message } => {
                self.fail(&format!("HTTP {status}: {message}"))
            }

            SessionMsg::PageHistoryReported(len) => {
                self.page_history_len = Some(len);
                vec![]
            }

            SessionMsg::RetryRequested => {
                if self.phase != Phase::Error {
                    return vec![];
                }
                self.error = None;
                self.phase = Phase::Loading;
                vec![Cmd::Surface(SurfaceCommand::Reload)]
            }

            SessionMsg::GoBackRequested => {
                if self.can_go_back {
                    vec![Cmd::Surface(SurfaceCommand::GoBack)]
                } else {
                    vec![]
                }
            }

            SessionMsg::BackRequested { at_ms } => self.back_requested(at_ms),

            SessionMsg::OpenWindowRequested(url) => {
                // Never a second surface; the target loads in place
                vec![Cmd::Surface(SurfaceCommand::Navigate { url })]
            }
        }
    }

    /// Hardware back press, in priority order: engine history, in-page
    /// history, confirmed exit, arm exit confirmation.
    fn back_requested(&mut self, at_ms: i64) -> Vec<Cmd> {
        if self.can_go_back {
            return vec![Cmd::Surface(SurfaceCommand::GoBack)];
        }

        if self.page_history_len.is_some_and(|len| len > 1) {
            self.last_back_press_at = Some(at_ms);
            return vec![Cmd::Surface(SurfaceCommand::RunScript {
                source: IN_PAGE_BACK_SCRIPT.to_string(),
            })];
        }

        if self
            .last_back_press_at
            .is_some_and(|t| at_ms.saturating_sub(t) <= self.exit_grace_ms)
        {
            self.last_back_press_at = None;
            return vec![Cmd::ExitApp];
        }

        self.last_back_press_at = Some(at_ms);
        vec![]
    }

    fn fail(&mut self, raw: &str) -> Vec<Cmd> {
        self.phase = Phase::Error;
        self.error = Some(classify(raw));
        vec![]
    }
}
