//! Log sink trait definition

use std::sync::Arc;

use super::record::LogRecord;

/// Sink abstraction for dispatched log records
///
/// Implementations:
/// - `NoOpSink`: Silent sink for testing
/// - `ConsoleSink`: Emits to stdout/stderr
/// - `MemorySink`: Captures records in memory
/// - `FileSink`: Appends records to a file
pub trait LogSink: Send + Sync {
    /// Handle a single record
    ///
    /// The dispatch contract ends at "record handed over": a sink that
    /// fails internally swallows the failure, it never propagates back
    /// to the logging call site.
    fn emit(&self, record: &LogRecord);
}

/// Type alias for a boxed sink
pub type BoxedSink = Box<dyn LogSink>;

/// Type alias for an Arc-wrapped sink
pub type SharedSink = Arc<dyn LogSink>;

/// Errors that can occur while constructing a sink
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SinkResult<T> = Result<T, SinkError>;
