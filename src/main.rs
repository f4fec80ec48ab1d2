//! tap-jsonl CLI
//!
//! Reads JSONL files and writes Singer messages to standard output

use clap::Parser;
use tap_jsonl::cli::{Cli, Runner};
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr; stdout carries only protocol messages
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .init();

    tracing::debug!("{} {}", tap_jsonl::NAME, tap_jsonl::VERSION);

    let cli = Cli::parse();
    let runner = Runner::new(cli);

    if let Err(e) = runner.run() {
        tracing::error!("{}: {e}", tap_jsonl::NAME);
        std::process::exit(1);
    }
}

/// Filter from `RUST_LOG` directives, INFO when unset, empty or invalid
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_rust_log_debug_is_honoured() {
        let filter = log_filter(Some("debug".to_string()));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_default_level_is_info() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_empty_rust_log_is_info() {
        assert_eq!(log_filter(Some(String::new())).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_invalid_directives_fall_back_to_info() {
        let filter = log_filter(Some("tap_jsonl=notalevel".to_string()));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }
}
