use serde::{Deserialize, Serialize};

/// Messages specific to SessionState (browser lifecycle and navigation)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionMsg {
    // Lifecycle reports from the Browser Surface
    LoadStarted,
    LoadFinished,
    NavigationChanged { can_go_back: bool, is_loading: bool },
    LoadFailed(String),
    HttpErrorReceived { status: u16, message: String },
    PageHistoryReported(u32),

    // User intent
    RetryRequested,
    BackRequested { at_ms: i64 },
    GoBackRequested,

    // Containment: open-in-new-window becomes navigate-in-place
    OpenWindowRequested(String),
}
