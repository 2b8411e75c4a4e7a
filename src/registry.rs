//! Process-wide registry of named loggers
//!
//! Libraries share a logger by name without passing handles around:
//!
//! ```
//! use rust_log_pipeline::registry;
//!
//! let db = registry::get("db");
//! db.info("pool ready", Vec::new()).unwrap();
//! ```

use crate::core::Logger;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::collections::HashMap;

/// Name under which the root logger is registered
pub const ROOT_NAME: &str = "root";

static REGISTRY: Lazy<Mutex<HashMap<String, Logger>>> = Lazy::new(|| {
    let mut loggers = HashMap::new();
    loggers.insert(ROOT_NAME.to_string(), Logger::root());
    Mutex::new(loggers)
});

/// Logger registered under `name`; a new child of the root logger is
/// created and registered when there is none.
pub fn get(name: &str) -> Logger {
    REGISTRY
        .lock()
        .entry(name.to_string())
        .or_insert_with(|| Logger::new(Vec::new()))
        .clone()
}

/// Register `logger` under `name`.
///
/// When a logger is already registered, its context and handler are
/// replaced by the ones of `logger` instead, so handles obtained earlier
/// through [`get`] log through the new configuration.
pub fn set(name: &str, logger: Logger) {
    let mut loggers = REGISTRY.lock();
    match loggers.get(name) {
        Some(existing) => existing.overwrite_from(&logger),
        None => {
            loggers.insert(name.to_string(), logger);
        }
    }
}

/// The root logger
pub fn root() -> Logger {
    get(ROOT_NAME)
}

/// Whether a logger is registered under `name`
pub fn contains(name: &str) -> bool {
    REGISTRY.lock().contains_key(name)
}

/// Unregister `name`. Handles already given out keep working.
pub fn remove(name: &str) -> Option<Logger> {
    if name == ROOT_NAME {
        return None;
    }
    REGISTRY.lock().remove(name)
}

pub fn names() -> Vec<String> {
    let mut names: Vec<String> = REGISTRY.lock().keys().cloned().collect();
    names.sort();
    names
}
