#![cfg(feature = "std")]

//! Diagnostics sink for the `sea-battle` binary.
//!
//! Records go to stderr so stdout carries only command output (boards, shot
//! answers, the `sim` JSON summary).

use log::{LevelFilter, Log, Metadata, Record};
use std::env;

/// Environment variable holding the log level name.
pub const LOG_ENV: &str = "SEA_BATTLE_LOG";

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Parse a level name, falling back to `info`.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger with the level named by [`LOG_ENV`].
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
