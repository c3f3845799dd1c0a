use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::core::cmd::{Cmd, SurfaceCommand};

/// Command executor that routes Elm commands to the Browser Surface and the
/// host shell. Sinks are injected as channel senders; a missing sink drops
/// the command with a warning rather than failing the update cycle.
#[derive(Clone, Default)]
pub struct CmdExecutor {
    surface_sender: Option<mpsc::UnboundedSender<SurfaceCommand>>,
    exit_sender: Option<mpsc::UnboundedSender<()>>,
}

/// Executor wiring statistics
#[derive(Debug, Clone)]
pub struct ExecutorStats {
    pub has_surface_sender: bool,
    pub has_exit_sender: bool,
}

impl CmdExecutor {
    /// Create a new command executor with no sinks configured
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new command executor with Browser Surface support
    pub fn new_with_surface(surface_sender: mpsc::UnboundedSender<SurfaceCommand>) -> Self {
        Self {
            surface_sender: Some(surface_sender),
            exit_sender: None,
        }
    }

    /// Inject the Browser Surface command sink
    pub fn set_surface_sender(&mut self, sender: mpsc::UnboundedSender<SurfaceCommand>) {
        self.surface_sender = Some(sender);
    }

    /// Inject the host exit sink, used on confirmed double-back
    pub fn set_exit_sender(&mut self, sender: mpsc::UnboundedSender<()>) {
        self.exit_sender = Some(sender);
    }

    pub fn get_stats(&self) -> ExecutorStats {
        ExecutorStats {
            has_surface_sender: self.surface_sender.is_some(),
            has_exit_sender: self.exit_sender.is_some(),
        }
    }

    /// Execute a single command by routing it to the appropriate sink
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {
                // No-op command, nothing to execute
            }

            Cmd::Surface(surface_cmd) => {
                if let Some(sender) = &self.surface_sender {
                    sender.send(surface_cmd.clone())?;
                } else {
                    log::warn!("Surface command ignored: no surface sender configured");
                }
            }

            Cmd::ExitApp => {
                if let Some(sender) = &self.exit_sender {
                    sender.send(())?;
                } else {
                    log::warn!("ExitApp ignored: no exit sender configured");
                }
            }

            Cmd::LogError { message } => {
                log::error!("{message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("{message}");
            }

            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.execute_command(cmd)?;
                }
            }
        }

        Ok(())
    }

    /// Execute commands in order, returning a human-readable execution log
    pub fn execute_commands(&self, cmds: &[Cmd]) -> Result<Vec<String>> {
        let mut execution_log = Vec::with_capacity(cmds.len());
        for cmd in cmds {
            self.execute_command(cmd)?;
            execution_log.push(format!("Executed: {cmd:?}"));
        }
        Ok(execution_log)
    }
}
