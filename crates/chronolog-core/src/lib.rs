//! Chronolog Core
//!
//! Runtime-agnostic tagged logging and execution timing.
//! This crate provides the core facilities that can be used from any
//! environment (Node.js via napi-rs, native CLI, etc.):
//!
//! - [`logging`]: leveled, optionally tagged records dispatched to a
//!   pluggable sink, with one piece of process-wide state (the global
//!   default tag applied to untagged records)
//! - [`timing`]: wall-clock timers with named cumulative and averaged
//!   checkpoints and textual reports
//!
//! The two facilities are independent of each other.
//!
//! ```rust
//! use chronolog_core::logging;
//! use chronolog_core::timing::ExecutionTimer;
//!
//! logging::set_global_tag("worker");
//! logging::info("starting up", None);
//! logging::warn("low disk space", Some("storage"));
//!
//! let mut timer = ExecutionTimer::start("startup");
//! timer.checkpoint("config loaded");
//! println!("{}", timer.report());
//! ```

pub mod logging;
pub mod timing;

// Re-export commonly used types
pub use logging::{
    ConsoleSink, FileSink, LogLevel, LogRecord, LogSink, MemorySink, NoOpSink, SharedSink,
    SinkError, SinkResult,
};

pub use timing::{CheckpointStats, Clock, ExecutionTimer, ManualClock, SharedClock, SystemClock};
