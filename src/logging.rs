#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Environment variable holding the log level filter.
pub const LOG_ENV: &str = "SEABATTLE_LOG";

/// Initialize logging with a level taken from the `SEABATTLE_LOG` environment variable.
/// Defaults to `info` if the variable is not set or invalid. Records go to stderr so
/// they never mix with the game's own output.
pub fn init_logging() {
    init_logging_with(LevelFilter::Info);
}

/// Like [`init_logging`], with the level to use when the variable is absent.
pub fn init_logging_with(default: LevelFilter) {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(default);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
