use std::time::Duration;

use color_eyre::eyre::{Error, Result};
use tokio::sync::mpsc;

use crate::{
    core::{cmd::SurfaceCommand, raw_msg::RawMsg, state::AppState},
    infrastructure::{config::Config, surface::BrowserSurface},
    integration::runtime::Runtime,
};

/// Drives the update loop: pumps raw events from the Browser Surface into
/// the runtime, executes the resulting commands against the surface, and
/// stops when the session asks to quit.
pub struct AppRunner<S: BrowserSurface> {
    config: Config,
    tick_rate: f64,
    runtime: Runtime,
    surface: S,
    event_rx: mpsc::UnboundedReceiver<RawMsg>,
    surface_cmd_rx: mpsc::UnboundedReceiver<SurfaceCommand>,
    exit_rx: mpsc::UnboundedReceiver<()>,
}

impl<S: BrowserSurface> AppRunner<S> {
    pub fn new(
        config: Config,
        tick_rate: f64,
        surface: S,
        event_rx: mpsc::UnboundedReceiver<RawMsg>,
    ) -> Result<Self> {
        let (surface_cmd_tx, surface_cmd_rx) = mpsc::unbounded_channel();
        let (exit_tx, exit_rx) = mpsc::unbounded_channel();

        let initial_state = AppState::new_with_config(config.clone());
        let mut runtime = Runtime::new_with_surface_executor(initial_state, surface_cmd_tx);
        runtime
            .add_exit_support(exit_tx)
            .map_err(Error::msg)?;

        Ok(Self {
            config,
            tick_rate,
            runtime,
            surface,
            event_rx,
            surface_cmd_rx,
            exit_rx,
        })
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Run the main loop: drain surface events, update state, dispatch
    /// commands. Returns once the session confirms an exit or the event
    /// source disconnects and all messages are drained.
    pub async fn run(&mut self) -> Result<()> {
        // Initial load; lifecycle events come back through the event channel
        self.surface.navigate(&self.config.start_url)?;

        let tick = Duration::from_secs_f64(1.0 / self.tick_rate.max(1.0));

        loop {
            let disconnected = self.drain_events();

            if let Err(e) = self.runtime.run_update_cycle() {
                log::error!("Runtime error: {e}");
                self.runtime
                    .send_raw_msg(RawMsg::Error(format!("Runtime error: {e}")));
            }

            self.dispatch_surface_commands()?;

            // Confirmed double-back exit arrives on its own channel
            if self.exit_rx.try_recv().is_ok() {
                log::info!("Exit confirmed by double back press");
                break;
            }

            if self.runtime.state().system.should_quit {
                break;
            }

            if disconnected {
                // Event source is gone; stop after the queues are empty
                self.runtime.send_raw_msg(RawMsg::Quit);
                let _ = self.runtime.run_update_cycle();
                self.dispatch_surface_commands()?;
                break;
            }

            tokio::time::sleep(tick).await;
        }

        Ok(())
    }

    /// Moves queued surface events into the runtime. Returns true when the
    /// event source has disconnected.
    fn drain_events(&mut self) -> bool {
        loop {
            match self.event_rx.try_recv() {
                Ok(event) => {
                    if !event.is_frequent() {
                        log::debug!("surface -> {event:?}");
                    }
                    self.runtime.send_raw_msg(event);
                }
                Err(mpsc::error::TryRecvError::Empty) => return false,
                Err(mpsc::error::TryRecvError::Disconnected) => return true,
            }
        }
    }

    fn dispatch_surface_commands(&mut self) -> Result<()> {
        while let Ok(cmd) = self.surface_cmd_rx.try_recv() {
            self.surface.dispatch(&cmd)?;
        }
        Ok(())
    }
}
