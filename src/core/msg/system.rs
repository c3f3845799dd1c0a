use serde::{Deserialize, Serialize};

/// Messages specific to SystemState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SystemMsg {
    // System control
    Quit,

    // Status management
    UpdateStatusMessage(String),
    ClearStatusMessage,
    ShowError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_msg_equality() {
        assert_eq!(SystemMsg::Quit, SystemMsg::Quit);
        assert_ne!(SystemMsg::Quit, SystemMsg::ClearStatusMessage);

        let error1 = SystemMsg::ShowError("test".to_string());
        let error2 = SystemMsg::ShowError("test".to_string());
        assert_eq!(error1, error2);
    }

    #[test]
    fn test_system_msg_serialization() {
        let msg = SystemMsg::UpdateStatusMessage("test status".to_string());
        let serialized = serde_json::to_string(&msg).expect("serialize");
        let deserialized: SystemMsg = serde_json::from_str(&serialized).expect("deserialize");
        assert_eq!(msg, deserialized);
    }
}
