use serde::{Deserialize, Serialize};

pub mod session;
pub mod system;

use self::session::SessionMsg;
use self::system::SystemMsg;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // Session operations (delegated to SessionState)
    Session(SessionMsg),

    // System operations (delegated to SystemState)
    System(SystemMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    /// Domain messages are generally not frequent (raw messages handle Tick)
    pub fn is_frequent(&self) -> bool {
        false
    }
}
