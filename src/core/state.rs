pub mod session;
pub mod system;

pub use self::session::{Phase, SessionState};
pub use self::system::SystemState;

use crate::{domain::origin::OriginPolicy, infrastructure::config::Config};

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub session: SessionState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Initialize AppState with the specified config
    pub fn new_with_config(config: Config) -> Self {
        Self {
            session: SessionState::with_exit_grace_ms(config.back_exit_grace_ms),
            config: ConfigState { config },
            ..Default::default()
        }
    }

    /// Origin policy derived from the loaded configuration
    pub fn origin_policy(&self) -> OriginPolicy {
        OriginPolicy::new(self.config.config.allowed_origin.clone())
    }
}
