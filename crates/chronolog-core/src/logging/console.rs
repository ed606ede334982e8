//! Console sink implementation

use super::record::{LogLevel, LogRecord};
use super::traits::LogSink;

/// A sink that emits records to the console (stdout/stderr)
///
/// Info goes to stdout, everything else to stderr.
#[derive(Debug, Clone)]
pub struct ConsoleSink {
    prefix: String,
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSink {
    /// Create a new console sink with default prefix
    pub fn new() -> Self {
        Self {
            prefix: "[chronolog]".to_string(),
        }
    }

    /// Create a console sink with a custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl LogSink for ConsoleSink {
    fn emit(&self, record: &LogRecord) {
        match record.level {
            LogLevel::Info => println!("{} {}", self.prefix, record),
            _ => eprintln!("{} {}", self.prefix, record),
        }
    }
}
