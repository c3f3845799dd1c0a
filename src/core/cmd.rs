use serde::{Deserialize, Serialize};

/// Script injected to unwind one step of in-page client-side history when
/// the engine itself reports no history to consume. Best-effort: the engine
/// confirms nothing; later lifecycle events are the only feedback.
pub const IN_PAGE_BACK_SCRIPT: &str = "history.back();";

/// Fire-and-forget instructions for the Browser Surface. The controller
/// never observes a return value; effects show up as later raw events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceCommand {
    Reload,
    GoBack,
    Navigate { url: String },
    RunScript { source: String },
}

/// Elm-like command definitions
/// Represents side effects returned by the update function, executed by the
/// host runtime. Keeping effects out of the reducer keeps state transitions
/// pure and independently testable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // Browser Surface instructions
    Surface(SurfaceCommand),

    // Host application shell
    ExitApp,

    // Logging related
    LogError { message: String },
    LogInfo { message: String },

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(commands: Vec<Cmd>) -> Cmd {
        let mut commands = commands;
        match commands.len() {
            0 => Cmd::None,
            1 => commands.remove(0),
            _ => Cmd::Batch(commands),
        }
    }

    /// Whether the command reaches the Browser Surface
    pub fn is_surface(&self) -> bool {
        match self {
            Cmd::Surface(..) => true,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::is_surface),
            Cmd::ExitApp | Cmd::LogError { .. } | Cmd::LogInfo { .. } | Cmd::None => false,
        }
    }
}
