//! Browser implementations of the notification capability and the `log` sink.

use covidmap_core::prelude::*;
use log::{Level, LevelFilter, Metadata, Record};
use wasm_bindgen::prelude::*;

/// Forwards notifications to a JS callback, or to `window.alert` when none
/// was given. The callback receives `{ title, description, variant }`.
pub struct JsNotifier {
    callback: Option<js_sys::Function>,
}

impl JsNotifier {
    pub fn new(callback: Option<js_sys::Function>) -> Self {
        Self { callback }
    }

    fn alert(notification: &Notification) {
        if let Some(window) = web_sys::window() {
            let text = format!("{}: {}", notification.title, notification.description);
            if window.alert_with_message(&text).is_err() {
                log::warn!("{text}");
            }
        }
    }
}

impl Notifier for JsNotifier {
    fn notify(&self, notification: Notification) {
        let Some(callback) = &self.callback else {
            Self::alert(&notification);
            return;
        };
        let delivered = serde_wasm_bindgen::to_value(&notification)
            .map_err(JsValue::from)
            .and_then(|payload| callback.call1(&JsValue::NULL, &payload));
        if let Err(err) = delivered {
            log::warn!("notification callback failed: {err:?}");
            Self::alert(&notification);
        }
    }
}

/// `log` backend writing to the browser console.
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Installs the console logger. Later calls are ignored.
pub fn init_logging(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
