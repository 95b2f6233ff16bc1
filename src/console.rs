//! `log` backend that writes library log records to the browser console.

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Console method a record is written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    Log,
    Warn,
    Error,
}

impl From<Level> for ConsoleMethod {
    fn from(level: Level) -> Self {
        match level {
            Level::Error => ConsoleMethod::Error,
            Level::Warn => ConsoleMethod::Warn,
            Level::Info | Level::Debug | Level::Trace => ConsoleMethod::Log,
        }
    }
}

/// Renders a record as `[LEVEL target] message`.
pub fn format_line(level: Level, target: &str, message: &std::fmt::Arguments<'_>) -> String {
    format!("[{level} {target}] {message}")
}

pub struct ConsoleLogger {
    max_level: LevelFilter,
}

impl ConsoleLogger {
    pub const fn new(max_level: LevelFilter) -> Self {
        Self { max_level }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(record.level(), record.target(), record.args());
        match ConsoleMethod::from(record.level()) {
            ConsoleMethod::Log => leptos::logging::log!("{}", line),
            ConsoleMethod::Warn => leptos::logging::warn!("{}", line),
            ConsoleMethod::Error => leptos::logging::error!("{}", line),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger::new(LevelFilter::Info);

/// Installs the console logger. Later calls are ignored.
pub fn init() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LOGGER.max_level);
    }
}
