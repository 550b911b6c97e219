//! Browser console sink for folio-core's tracing layer.

use folio_core::logging::{ConsoleLayer, LogEntry, LogSink};
use tracing::Level;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
use wasm_bindgen::JsValue;

/// Writes entries to the matching `console.*` method.
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write(&self, level: Level, entry: &LogEntry) {
        let line = JsValue::from_str(&entry.to_console_line());
        match level {
            Level::ERROR => web_sys::console::error_1(&line),
            Level::WARN => web_sys::console::warn_1(&line),
            Level::INFO => web_sys::console::info_1(&line),
            Level::DEBUG => web_sys::console::debug_1(&line),
            Level::TRACE => web_sys::console::log_1(&line),
        }
    }
}

/// Install the global subscriber. `directive` is an `EnvFilter` string such as
/// `info` or `folio=debug`; an unparsable directive falls back to `info`.
pub fn init(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(ConsoleLayer::new(ConsoleSink));

    // A second init (e.g. page restored from bfcache) keeps the first subscriber
    let _ = tracing::subscriber::set_global_default(subscriber);
}
