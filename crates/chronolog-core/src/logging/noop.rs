//! No-op sink implementation

use super::record::LogRecord;
use super::traits::LogSink;

/// A sink that does nothing
///
/// Useful for testing or when logging is not needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl NoOpSink {
    /// Create a new no-op sink
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for NoOpSink {
    fn emit(&self, _record: &LogRecord) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;

    #[test]
    fn test_noop_sink() {
        let sink = NoOpSink::new();

        // These should all do nothing without panicking
        sink.emit(&LogRecord::new(LogLevel::Debug, "debug message", ""));
        sink.emit(&LogRecord::new(LogLevel::Error, "error message", "tag"));
    }
}
