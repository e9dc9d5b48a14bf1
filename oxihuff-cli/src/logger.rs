//! Minimal stderr backend for the `log` facade.

use log::{LevelFilter, Log, Metadata, Record};
use oxihuff_tree::DebugLevel;

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Level filter for a codec debug level. Warnings always pass.
pub fn level_filter(level: DebugLevel) -> LevelFilter {
    match level {
        DebugLevel::Off => LevelFilter::Warn,
        DebugLevel::Low => LevelFilter::Debug,
        DebugLevel::High => LevelFilter::Trace,
    }
}

/// Install the stderr logger. Only the first call has any effect.
pub fn init(level: DebugLevel) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level_filter(level));
    }
}
