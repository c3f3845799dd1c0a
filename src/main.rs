#![deny(warnings)]

use clap::Parser;
use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use kioskview::{
    infrastructure::{
        cli::Cli,
        config::Config,
        surface::simulated::SimulatedSurface,
        trace::{feed_trace, load_trace, spawn_stdin_feed},
    },
    integration::app_runner::AppRunner,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    // Load configuration (file-based), then apply CLI overrides
    let mut config = Config::new()?;
    if let Some(url) = args.url {
        config.start_url = url;
    }
    if let Some(origin) = args.origin {
        config.allowed_origin = origin;
    }
    config.validate()?;

    // Raw surface events flow through this channel into the runner
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    if let Some(trace_path) = args.trace {
        // Replay mode: deliver the recorded events, then drop the sender so
        // the runner drains and shuts down.
        let events = load_trace(&trace_path)?;
        feed_trace(events, event_tx.clone());
        drop(event_tx);
    } else {
        // Interactive mode: JSON-encoded events arrive on stdin, one per line
        let _feed = spawn_stdin_feed(event_tx.clone());
        drop(event_tx);
    }

    let surface = SimulatedSurface::new();
    let mut runner = AppRunner::new(config, args.tick_rate, surface, event_rx)?;
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
