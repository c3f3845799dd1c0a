//! Core Elm architecture modules
//!
//! - **State** (`state`): session/system/config state tree
//! - **Message** (`msg`, `raw_msg`): domain and raw external events
//! - **Translator** (`translator`): pure raw-to-domain translation
//! - **Update** (`update`): pure state transition function
//! - **Command** (`cmd`, `cmd_executor`): side effects and their routing

pub mod cmd;
pub mod cmd_executor;
pub mod msg;
pub mod raw_msg;
pub mod state;
pub mod translator;
pub mod update;
