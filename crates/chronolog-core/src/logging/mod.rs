//! Tagged, leveled logging dispatched to a pluggable sink

mod console;
mod facade;
mod memory;
mod noop;
mod record;
mod traits;
pub mod file_sink;

pub use record::{LogLevel, LogRecord};
pub use traits::{BoxedSink, LogSink, SharedSink, SinkError, SinkResult};

pub use console::ConsoleSink;
pub use file_sink::FileSink;
pub use memory::MemorySink;
pub use noop::NoOpSink;

// Re-export facade functions for convenience
pub use facade::{
    debug, error, global_tag, info, install_sink, log, min_level, set_global_tag, set_min_level,
    set_sink, warn,
};
