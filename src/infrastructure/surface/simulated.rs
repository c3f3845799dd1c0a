use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::{cmd::SurfaceCommand, raw_msg::RawMsg},
    infrastructure::surface::BrowserSurface,
};

/// Stand-in browser engine for the replay harness and tests.
///
/// Records every instruction it receives; with an event sender attached it
/// also synthesizes the happy-path lifecycle events a real engine would
/// report after a navigation or reload.
#[derive(Debug, Default)]
pub struct SimulatedSurface {
    issued: Vec<SurfaceCommand>,
    event_tx: Option<mpsc::UnboundedSender<RawMsg>>,
}

impl SimulatedSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Synthesize lifecycle feedback on navigate/reload
    pub fn with_events(event_tx: mpsc::UnboundedSender<RawMsg>) -> Self {
        Self {
            issued: Vec::new(),
            event_tx: Some(event_tx),
        }
    }

    /// Instructions received so far, in order
    pub fn issued(&self) -> &[SurfaceCommand] {
        &self.issued
    }

    fn record(&mut self, cmd: SurfaceCommand) {
        log::debug!("surface <- {cmd:?}");
        self.issued.push(cmd);
    }

    fn emit_load_cycle(&self) {
        if let Some(tx) = &self.event_tx {
            let _ = tx.send(RawMsg::LoadStart);
            let _ = tx.send(RawMsg::LoadEnd);
            let _ = tx.send(RawMsg::NavigationState {
                can_go_back: false,
                is_loading: false,
            });
        }
    }
}

impl BrowserSurface for SimulatedSurface {
    fn reload(&mut self) -> Result<()> {
        self.record(SurfaceCommand::Reload);
        self.emit_load_cycle();
        Ok(())
    }

    fn go_back(&mut self) -> Result<()> {
        self.record(SurfaceCommand::GoBack);
        Ok(())
    }

    fn navigate(&mut self, url: &str) -> Result<()> {
        self.record(SurfaceCommand::Navigate {
            url: url.to_string(),
        });
        self.emit_load_cycle();
        Ok(())
    }

    fn run_script(&mut self, source: &str) -> Result<()> {
        self.record(SurfaceCommand::RunScript {
            source: source.to_string(),
        });
        Ok(())
    }
}
