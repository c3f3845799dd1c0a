use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use tokio::sync::mpsc;

use crate::core::raw_msg::RawMsg;

/// Parse a JSON array of raw surface events
pub fn parse_trace(source: &str) -> Result<Vec<RawMsg>> {
    serde_json::from_str(source).wrap_err("invalid event trace")
}

/// Load a JSON event trace from disk
pub fn load_trace(path: &Path) -> Result<Vec<RawMsg>> {
    let source = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("cannot read trace {}", path.display()))?;
    parse_trace(&source)
}

/// Feed a trace into the runner's event channel. Dropping the sender when
/// the trace is exhausted lets the runner shut down cleanly.
pub fn feed_trace(events: Vec<RawMsg>, tx: mpsc::UnboundedSender<RawMsg>) {
    for event in events {
        if tx.send(event).is_err() {
            break;
        }
    }
}

/// Read JSON-encoded raw events from stdin, one per line, until EOF.
/// This is the interactive harness mode: event streams can be piped in.
pub fn spawn_stdin_feed(tx: mpsc::UnboundedSender<RawMsg>) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        let mut line = String::new();
        loop {
            line.clear();
            match std::io::BufRead::read_line(&mut stdin.lock(), &mut line) {
                Ok(0) => break,
                Ok(_) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    match serde_json::from_str::<RawMsg>(trimmed) {
                        Ok(event) => {
                            if tx.send(event).is_err() {
                                break;
                            }
                        }
                        Err(e) => log::warn!("ignoring unparseable event line: {e}"),
                    }
                }
                Err(e) => {
                    log::error!("stdin read failed: {e}");
                    break;
                }
            }
        }
    })
}
