use serde::{Deserialize, Serialize};

/// Raw messages from external sources (browser engine, user input, host)
/// These represent unprocessed external events that need to be translated
/// into domain messages. Serializable so event traces can be replayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawMsg {
    // Browser Surface lifecycle
    LoadStart,
    LoadEnd,
    NavigationState { can_go_back: bool, is_loading: bool },
    LoadError(String),
    HttpError { status: u16, message: String },

    // Browser Surface navigation requests
    NavigationRequest(String),
    OpenWindow(String),
    PageHistory(u32),

    // User input
    BackPressed { at_ms: i64 },
    SwipeEnded { dx: f32, dy: f32 },
    RetryPressed,

    // Host events
    Tick,
    Quit,
    Error(String),
}

impl RawMsg {
    /// Hardware back press stamped with the current wall clock.
    pub fn back_pressed_now() -> Self {
        RawMsg::BackPressed {
            at_ms: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_msg_frequent_detection() {
        assert!(RawMsg::Tick.is_frequent());
        assert!(!RawMsg::Quit.is_frequent());
        assert!(!RawMsg::LoadStart.is_frequent());
        assert!(!RawMsg::BackPressed { at_ms: 0 }.is_frequent());
    }

    #[test]
    fn test_raw_msg_equality() {
        assert_eq!(RawMsg::LoadStart, RawMsg::LoadStart);
        assert_ne!(RawMsg::LoadStart, RawMsg::LoadEnd);
        assert_eq!(
            RawMsg::HttpError {
                status: 503,
                message: "Service Unavailable".to_string()
            },
            RawMsg::HttpError {
                status: 503,
                message: "Service Unavailable".to_string()
            }
        );
    }

    #[test]
    fn test_raw_msg_serialization() {
        let msg = RawMsg::NavigationState {
            can_go_back: true,
            is_loading: false,
        };
        let serialized = serde_json::to_string(&msg).expect("serialize");
        let deserialized: RawMsg = serde_json::from_str(&serialized).expect("deserialize");
        assert_eq!(msg, deserialized);
    }

    #[test]
    fn test_back_pressed_now_is_stamped() {
        let RawMsg::BackPressed { at_ms } = RawMsg::back_pressed_now() else {
            panic!("expected BackPressed");
        };
        assert!(at_ms > 0);
    }
}
