//! Diagnostic logging for the CLI.
//!
//! Console commands log to stderr. The interactive browser owns the terminal,
//! so it logs to `<data-dir>/logs/moonshot.log` instead, or nowhere if that
//! file cannot be opened. `RUST_LOG` overrides `--log-level`.

use crate::types::LogLevel;
use is_terminal::IsTerminal;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "moonshot.log";

pub enum LogSink {
    Stderr,
    File(PathBuf),
}

impl LogSink {
    /// Log file location inside a data directory
    pub fn in_data_dir(data_dir: &Path) -> Self {
        LogSink::File(data_dir.join("logs").join(LOG_FILE_NAME))
    }
}

pub fn filter_for(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "moonshot={level},moonshot_core={level},moonshot_types={level}"
        ))
    })
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(level: LogLevel, sink: LogSink) {
    let filter = filter_for(level);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let _ = match sink {
        LogSink::Stderr => builder
            .with_ansi(std::io::stderr().is_terminal())
            .with_writer(std::io::stderr)
            .try_init(),
        LogSink::File(path) => match open_log_file(&path) {
            Some(file) => builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init(),
            None => builder.with_writer(std::io::sink).try_init(),
        },
    };
}

fn open_log_file(path: &Path) -> Option<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}
