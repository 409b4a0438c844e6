use crate::types::LogLevel;
use anyhow::Result;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "pantry.log";

/// Where log lines go
pub enum LogSink<'a> {
    Stderr,
    /// Append to `pantry.log` in the given directory; used while the TUI
    /// owns the terminal
    File(&'a Path),
}

/// `RUST_LOG` wins over `--log-level` when set
fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()))
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(level: LogLevel, sink: LogSink<'_>) -> Result<()> {
    let filter = env_filter(level);

    let installed = match sink {
        LogSink::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init(),
        LogSink::File(dir) => {
            std::fs::create_dir_all(dir)?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(dir.join(LOG_FILE_NAME))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
    };

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
    Ok(())
}
