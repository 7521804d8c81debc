//! Console Logger
//!
//! A `log` backend for WASM front-ends. Each record becomes one line in the
//! browser console, routed to `console.error` / `warn` / `info` / `debug`
//! so devtools level filtering keeps working.

use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

/// Logger writing formatted records to the browser console
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(
            Local::now(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        let line = JsValue::from_str(&line);

        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    // Console writes are unbuffered.
    fn flush(&self) {}
}

/// Install the console logger as the global `log` backend.
///
/// Fails if another logger has already been installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger::new(level)))?;
    log::set_max_level(level);
    Ok(())
}

/// Format a record as `HH:MM:SS.mmm LEVEL [target] message`
pub fn format_line(time: DateTime<Local>, level: Level, target: &str, message: &str) -> String {
    format!("{} {:<5} [{}] {}", time.format("%H:%M:%S%.3f"), level, target, message)
}
