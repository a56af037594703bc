//! File-backed logging; the terminal belongs to the UI

use chart_core::config::LoggingConfig;
use std::fs::OpenOptions;
use std::io;

/// Route `log` output to the configured file at the configured level
pub fn init(config: &LoggingConfig) -> io::Result<()> {
    let level = config
        .level_filter()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)?;

    env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_secs()
        .try_init()
        .map_err(io::Error::other)
}
