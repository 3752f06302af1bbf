//! Console Logger
//!
//! `log` facade backend for WASM frontends. Each record becomes one line on the
//! matching browser console method (`console.error`, `console.warn`, ...).
//! Off the browser (native tests) lines go to stderr instead.

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Install the logger and set the max level. Calling it again only changes the level.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_err() {
        log::debug!("console logger already installed");
    }
    log::set_max_level(level);
}

/// `12:30:05.123 INFO  [target] message`
pub fn format_line(timestamp: &str, level: Level, target: &str, message: &std::fmt::Arguments<'_>) -> String {
    format!("{} {:<5} [{}] {}", timestamp, level, target, message)
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
        let line = format_line(&timestamp, record.level(), record.target(), record.args());
        write_line(record.level(), &line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let line = format_line("09:15:00.042", Level::Warn, "dashboard::api", &format_args!("GET {} failed", "/users"));
        assert_eq!(line, "09:15:00.042 WARN  [dashboard::api] GET /users failed");
    }

    #[test]
    fn test_init_twice_keeps_last_level() {
        init(LevelFilter::Info);
        init(LevelFilter::Warn);
        assert_eq!(log::max_level(), LevelFilter::Warn);
        assert!(!LOGGER.enabled(&Metadata::builder().level(Level::Info).build()));
        assert!(LOGGER.enabled(&Metadata::builder().level(Level::Error).build()));
    }
}
