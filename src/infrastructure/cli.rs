use std::path::PathBuf;

use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    /// Start URL, overriding the configured one
    #[arg(short, long, value_name = "URL")]
    pub url: Option<String>,

    /// Allowed origin prefix, overriding the configured one
    #[arg(short, long, value_name = "ORIGIN")]
    pub origin: Option<String>,

    /// Replay a JSON trace of raw surface events instead of reading stdin
    #[arg(short, long, value_name = "FILE")]
    pub trace: Option<PathBuf>,

    /// Tick rate, i.e. number of runner loop ticks per second
    #[arg(short = 'r', long, value_name = "FLOAT", default_value_t = 60.0)]
    pub tick_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["kioskview"]);

        assert!(cli.url.is_none());
        assert!(cli.origin.is_none());
        assert!(cli.trace.is_none());
        assert_eq!(cli.tick_rate, 60.0);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "kioskview",
            "--url",
            "https://app.example.com/start",
            "--origin",
            "https://app.example.com",
            "--trace",
            "events.json",
            "--tick-rate",
            "30.0",
        ]);

        assert_eq!(cli.url.as_deref(), Some("https://app.example.com/start"));
        assert_eq!(cli.origin.as_deref(), Some("https://app.example.com"));
        assert_eq!(cli.trace, Some(PathBuf::from("events.json")));
        assert_eq!(cli.tick_rate, 30.0);
    }
}
