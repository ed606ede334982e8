//! Process-wide logging facade
//!
//! Holds the installed sink, the minimum level, and the global default tag.
//! Every operation here is total: dispatch never fails and never panics.

use std::env;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use super::console::ConsoleSink;
use super::record::{LogLevel, LogRecord};
use super::traits::SharedSink;

/// Installed sink, console by default
static SINK: Lazy<RwLock<SharedSink>> = Lazy::new(|| RwLock::new(Arc::new(ConsoleSink::new())));

/// Process-wide default tag for untagged records
///
/// Last-write-wins. The tag is read at dispatch time, so a `set_global_tag`
/// racing a dispatch on another thread may stamp that one record with
/// either value. There is no stronger guarantee.
static GLOBAL_TAG: Lazy<RwLock<String>> = Lazy::new(|| RwLock::new(String::new()));

/// Minimum level, seeded from `CHRONOLOG_LOG_LEVEL` on first use
static MIN_LEVEL: Lazy<RwLock<LogLevel>> = Lazy::new(|| RwLock::new(level_from_env()));

fn level_from_env() -> LogLevel {
    env::var("CHRONOLOG_LOG_LEVEL")
        .map(|v| LogLevel::parse(&v))
        .unwrap_or(LogLevel::Debug)
}

/// Dispatch a record at the specified level
///
/// `tag` carries an explicit tag; `None` resolves to the current global
/// default tag, which may be empty. Records below the minimum level are
/// dropped before the sink sees them.
pub fn log(level: LogLevel, message: &str, tag: Option<&str>) {
    if level < min_level() {
        return;
    }
    let tag = match tag {
        Some(t) => t.to_string(),
        None => global_tag(),
    };
    let sink = SINK.read().clone();
    sink.emit(&LogRecord::new(level, message, tag));
}

/// Dispatch a debug record
pub fn debug(message: &str, tag: Option<&str>) {
    log(LogLevel::Debug, message, tag);
}

/// Dispatch an info record
pub fn info(message: &str, tag: Option<&str>) {
    log(LogLevel::Info, message, tag);
}

/// Dispatch a warning record
pub fn warn(message: &str, tag: Option<&str>) {
    log(LogLevel::Warn, message, tag);
}

/// Dispatch an error record
pub fn error(message: &str, tag: Option<&str>) {
    log(LogLevel::Error, message, tag);
}

/// Overwrite the process-wide default tag for all subsequent untagged calls
pub fn set_global_tag(tag: impl Into<String>) {
    *GLOBAL_TAG.write() = tag.into();
}

/// Current process-wide default tag
pub fn global_tag() -> String {
    GLOBAL_TAG.read().clone()
}

/// Replace the installed sink
pub fn set_sink(sink: SharedSink) {
    *SINK.write() = sink;
}

/// Replace the installed sink, returning the previous one
///
/// Lets a caller (typically a test) restore the previous sink afterwards.
pub fn install_sink(sink: SharedSink) -> SharedSink {
    std::mem::replace(&mut *SINK.write(), sink)
}

/// Current minimum level
pub fn min_level() -> LogLevel {
    *MIN_LEVEL.read()
}

/// Override the minimum level at runtime
pub fn set_min_level(level: LogLevel) {
    *MIN_LEVEL.write() = level;
}

/// Convenience macros for logging with format arguments
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::logging::debug(&format!($($arg)*), None)
    };
}

#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        $crate::logging::info(&format!($($arg)*), None)
    };
}

#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        $crate::logging::warn(&format!($($arg)*), None)
    };
}

#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        $crate::logging::error(&format!($($arg)*), None)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::MemorySink;
    use parking_lot::Mutex;

    // The facade state is process-wide; serialize the tests that touch it.
    static FACADE_LOCK: Mutex<()> = Mutex::new(());

    fn with_capture(f: impl FnOnce(&MemorySink)) {
        let _guard = FACADE_LOCK.lock();
        let capture = MemorySink::new();
        let previous = install_sink(Arc::new(capture.clone()));
        let saved_tag = global_tag();
        let saved_level = min_level();

        f(&capture);

        set_min_level(saved_level);
        set_global_tag(saved_tag);
        set_sink(previous);
    }

    #[test]
    fn test_explicit_tag_wins() {
        with_capture(|capture| {
            set_global_tag("global");
            error("explicit beats global", Some("local"));
            assert_eq!(capture.last().unwrap().tag, "local");
        });
    }

    #[test]
    fn test_untagged_uses_global_tag() {
        with_capture(|capture| {
            set_global_tag("engine");
            debug("untagged", None);
            info("also untagged", None);

            let records = capture.records();
            assert!(records.iter().all(|r| r.tag == "engine"));

            // Last write wins for every subsequent untagged call
            set_global_tag("swapped");
            warn("after swap", None);
            assert_eq!(capture.last().unwrap().tag, "swapped");
        });
    }

    #[test]
    fn test_unset_global_tag_is_empty() {
        with_capture(|capture| {
            set_global_tag("");
            info("no tag anywhere", None);
            assert_eq!(capture.last().unwrap().tag, "");
        });
    }

    #[test]
    fn test_each_level_dispatches() {
        with_capture(|capture| {
            set_min_level(LogLevel::Debug);
            debug("d", Some("t"));
            info("i", Some("t"));
            warn("w", Some("t"));
            error("e", Some("t"));

            let levels: Vec<_> = capture.records().iter().map(|r| r.level).collect();
            assert_eq!(
                levels,
                vec![
                    LogLevel::Debug,
                    LogLevel::Info,
                    LogLevel::Warn,
                    LogLevel::Error
                ]
            );
        });
    }

    #[test]
    fn test_min_level_filters() {
        with_capture(|capture| {
            set_min_level(LogLevel::Warn);
            debug("dropped", None);
            info("dropped", None);
            warn("kept", None);
            error("kept", None);
            assert_eq!(capture.len(), 2);
        });
    }

    #[test]
    fn test_format_macros() {
        with_capture(|capture| {
            set_min_level(LogLevel::Debug);
            set_global_tag("fmt");
            info_log!("answer is {}", 42);
            let record = capture.last().unwrap();
            assert_eq!(record.message, "answer is 42");
            assert_eq!(record.tag, "fmt");
        });
    }
}
