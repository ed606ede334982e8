//! Log record and level types

use std::fmt;

/// Severity of a log record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl LogLevel {
    /// Parse a level name, case insensitive
    ///
    /// Unrecognized names fall back to `Debug`, matching the behavior of
    /// the `CHRONOLOG_LOG_LEVEL` environment variable.
    pub fn parse(name: &str) -> LogLevel {
        match name.to_lowercase().as_str() {
            "debug" => LogLevel::Debug,
            "info" => LogLevel::Info,
            "warn" => LogLevel::Warn,
            "error" => LogLevel::Error,
            _ => LogLevel::Debug,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO "),
            LogLevel::Warn => write!(f, "WARN "),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// A single dispatched log record
///
/// Ephemeral: constructed at the call site, handed to the sink, dropped.
/// `tag` is either the explicit tag from the caller or the global default
/// tag current at dispatch time; it may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
    pub tag: String,
}

impl LogRecord {
    /// Create a record with an already-resolved tag
    pub fn new(level: LogLevel, message: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            tag: tag.into(),
        }
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tag.is_empty() {
            write!(f, "{}: {}", self.level, self.message)
        } else {
            write!(f, "{}: [{}] {}", self.level, self.tag, self.message)
        }
    }
}
