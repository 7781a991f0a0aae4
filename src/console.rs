//! `log` backend writing to the browser console.

use log::{Level, LevelFilter, Log, Metadata, Record};

#[cfg(target_arch = "wasm32")]
mod sys {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = console)]
        pub fn log(s: &str);
        #[wasm_bindgen(js_namespace = console)]
        pub fn warn(s: &str);
        #[wasm_bindgen(js_namespace = console)]
        pub fn error(s: &str);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod sys {
    pub fn log(s: &str) {
        eprintln!("{s}");
    }

    pub fn warn(s: &str) {
        eprintln!("{s}");
    }

    pub fn error(s: &str) {
        eprintln!("{s}");
    }
}

pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!("[{}] {}: {}", record.level(), record.target(), record.args());
        match record.level() {
            Level::Error => sys::error(&line),
            Level::Warn => sys::warn(&line),
            _ => sys::log(&line),
        }
    }

    fn flush(&self) {}
}

/// Installs the console logger. Later calls only adjust the level.
pub fn init(level: LevelFilter) {
    log::set_max_level(level);
    if log::set_logger(&LOGGER).is_ok() {
        log::debug!("console logger installed");
    }
}
