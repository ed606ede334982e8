//! Node.js bindings for Chronolog via napi-rs
//!
//! Thin forwarding layer only: every export marshals its arguments and
//! calls straight into `chronolog_core`. Durations cross the boundary as
//! whole milliseconds, truncated.

#![deny(clippy::all)]

use std::time::Duration;

use napi_derive::napi;

use chronolog_core::logging as core_logging;
use chronolog_core::timing::ExecutionTimer as CoreExecutionTimer;

fn to_millis(d: Duration) -> i64 {
    d.as_millis() as i64
}

// ============================================================================
// Logging
// ============================================================================

/// Log a debug message, tagged explicitly or with the global default tag
#[napi]
pub fn log_debug(message: String, tag: Option<String>) {
    core_logging::debug(&message, tag.as_deref());
}

/// Log an info message, tagged explicitly or with the global default tag
#[napi]
pub fn log_info(message: String, tag: Option<String>) {
    core_logging::info(&message, tag.as_deref());
}

/// Log a warning message, tagged explicitly or with the global default tag
#[napi]
pub fn log_warn(message: String, tag: Option<String>) {
    core_logging::warn(&message, tag.as_deref());
}

/// Log an error message, tagged explicitly or with the global default tag
#[napi]
pub fn log_error(message: String, tag: Option<String>) {
    core_logging::error(&message, tag.as_deref());
}

/// Overwrite the process-wide default tag for all subsequent untagged calls
#[napi]
pub fn set_global_tag(tag: String) {
    core_logging::set_global_tag(tag);
}

/// Current process-wide default tag
#[napi]
pub fn global_tag() -> String {
    core_logging::global_tag()
}

// ============================================================================
// Execution timing
// ============================================================================

/// Wall-clock timer with named checkpoints
///
/// All returned durations are whole milliseconds, truncated.
#[napi]
pub struct ExecutionTimer {
    inner: CoreExecutionTimer,
}

#[napi]
impl ExecutionTimer {
    /// Start a timer named `name` at the current instant
    #[napi(factory)]
    pub fn start(name: String) -> Self {
        Self {
            inner: CoreExecutionTimer::start(name),
        }
    }

    /// Name given at start
    #[napi(getter)]
    pub fn name(&self) -> String {
        self.inner.name().to_string()
    }

    /// Milliseconds elapsed since start
    #[napi]
    pub fn elapsed(&self) -> i64 {
        self.inner.elapsed_millis() as i64
    }

    /// Record elapsed-since-start under `label`, accumulating on repeats
    #[napi]
    pub fn checkpoint(&mut self, label: String) -> i64 {
        to_millis(self.inner.checkpoint(&label))
    }

    /// Record elapsed-since-start under `label` for averaging
    ///
    /// Returns this call's elapsed value; the running average is surfaced
    /// by `averageReport`.
    #[napi]
    pub fn average_checkpoint(&mut self, label: String) -> i64 {
        to_millis(self.inner.average_checkpoint(&label))
    }

    /// Elapsed-since-start without recording anything
    #[napi]
    pub fn silent_checkpoint(&self) -> i64 {
        to_millis(self.inner.silent_checkpoint())
    }

    /// One line per averaged label with its running average
    #[napi]
    pub fn average_report(&self) -> String {
        self.inner.average_report()
    }

    /// Total elapsed plus every cumulative checkpoint
    #[napi]
    pub fn report(&self) -> String {
        self.inner.report()
    }
}
