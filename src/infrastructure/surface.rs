pub mod simulated;

use color_eyre::eyre::Result;

use crate::core::cmd::SurfaceCommand;

/// Seam to the embedded browser engine. Implementations receive
/// fire-and-forget instructions; their effects come back as raw events on
/// the runner's event channel. The engine itself is a black box here.
pub trait BrowserSurface {
    fn reload(&mut self) -> Result<()>;
    fn go_back(&mut self) -> Result<()>;
    fn navigate(&mut self, url: &str) -> Result<()>;
    fn run_script(&mut self, source: &str) -> Result<()>;

    /// Route a queued command to the matching instruction
    fn dispatch(&mut self, cmd: &SurfaceCommand) -> Result<()> {
        match cmd {
            SurfaceCommand::Reload => self.reload(),
            SurfaceCommand::GoBack => self.go_back(),
            SurfaceCommand::Navigate { url } => self.navigate(url),
            SurfaceCommand::RunScript { source } => self.run_script(source),
        }
    }
}
