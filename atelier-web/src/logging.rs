//! `log` backend writing to the browser console.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::str::FromStr;
use wasm_bindgen::JsValue;

/// Forwards `log` records to `console.*` at the matching severity.
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from(format_record(
            record.level(),
            record.target(),
            &record.args().to_string(),
        ));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

fn format_record(level: Level, target: &str, message: &str) -> String {
    match level {
        Level::Info => message.to_string(),
        _ => format!("[{level} {target}] {message}"),
    }
}

/// Parse a configured level name, falling back to `Info`.
#[must_use]
pub fn parse_level(name: &str) -> LevelFilter {
    LevelFilter::from_str(name.trim()).unwrap_or(LevelFilter::Info)
}

/// Install the console logger. Later calls only adjust the level.
pub fn init(level: &str) {
    let filter = parse_level(level);
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(filter);
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn level_names_parse_case_insensitively() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level(" WARN "), LevelFilter::Warn);
        assert_eq!(parse_level("off"), LevelFilter::Off);
    }

    #[test]
    fn unknown_level_defaults_to_info() {
        assert_eq!(parse_level("chatty"), LevelFilter::Info);
        assert_eq!(parse_level(""), LevelFilter::Info);
    }

    #[test]
    fn info_lines_are_bare_and_others_tagged() {
        assert_eq!(
            format_record(Level::Info, "atelier_web", "Demande de devis cliquée"),
            "Demande de devis cliquée"
        );
        assert_eq!(
            format_record(Level::Error, "atelier_web::contact", "boom"),
            "[ERROR atelier_web::contact] boom"
        );
    }
}
