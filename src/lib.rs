//! # Kioskview - Single-Site Browser Shell
//!
//! A navigation and lifecycle state machine for a kiosk-style browser shell
//! that pins a single web application. This library implements an Elm-like
//! architecture for predictable state management.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`core::state`): Immutable application state
//! - **Message** (`core::msg`, `core::raw_msg`): Events that can change the state
//! - **Update** (`core::update`): Pure functions that transform state
//! - **Command** (`core::cmd`): Side effects (surface control, exit)
//! - **Surface** (`infrastructure::surface`): The embedded browser boundary
//!
//! ## Example Usage
//!
//! ```rust
//! use kioskview::{AppState, Msg, update};
//! use kioskview::core::msg::session::SessionMsg;
//! use kioskview::core::state::Phase;
//!
//! // Initialize state
//! let initial_state = AppState::default();
//!
//! // Process messages
//! let (new_state, commands) = update(Msg::Session(SessionMsg::LoadFinished), initial_state);
//!
//! // State is now updated and commands contain side effects to execute
//! assert_eq!(new_state.session.phase, Phase::Ready);
//! assert!(commands.is_empty());
//! ```
//!
//! ## Key Features
//!
//! - **Predictable State Management**: All state changes go through the update function
//! - **Testable**: Pure functions make testing straightforward
//! - **Type Safety**: Strong typing prevents many runtime errors
//! - **Separation of Concerns**: Side effects are clearly separated from state logic
//!
//! ## Modules
//!
//! - [`core`] - Elm architecture: state, messages, update, commands
//! - [`domain`] - Pure domain logic: error classification, origin policy, gestures
//! - [`infrastructure`] - Config, CLI, browser surface, trace replay
//! - [`integration`] - Runtime and async app runner
//! - [`utils`] - Logging, panic handling, path management

#![deny(warnings)]
#![allow(dead_code)]

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod utils;

// Re-exports for convenience
pub use crate::core::cmd::Cmd;
pub use crate::core::msg::Msg;
pub use crate::core::raw_msg::RawMsg;
pub use crate::core::state::AppState;
pub use crate::core::translator::translate_raw_to_domain;
pub use crate::core::update::update;
pub use crate::integration::runtime::{Runtime, RuntimeStats};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
