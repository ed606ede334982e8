//! File-backed sink for troubleshooting
//!
//! Appends timestamped records to a file. This is particularly useful when
//! stderr/stdout isn't visible (e.g., inside an embedding host process).

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use parking_lot::Mutex;

use super::record::LogRecord;
use super::traits::{LogSink, SinkResult};

/// A sink that appends records to a file
#[derive(Debug)]
pub struct FileSink {
    file: Mutex<File>,
    path: PathBuf,
}

impl FileSink {
    /// Open (or create) the file at `path` for appending
    pub fn create(path: impl AsRef<Path>) -> SinkResult<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            file: Mutex::new(file),
            path,
        })
    }

    /// Open a sink at the default location in the system temp directory
    pub fn create_default() -> SinkResult<Self> {
        Self::create(Self::default_path())
    }

    /// Default log file location
    pub fn default_path() -> PathBuf {
        // Use /tmp on Unix, or temp dir on Windows
        let mut path = std::env::temp_dir();
        path.push("chronolog.log");
        path
    }

    /// Path this sink writes to
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn timestamp() -> String {
        SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| {
                let secs = d.as_secs();
                let millis = d.subsec_millis();
                let hours = (secs % 86400) / 3600;
                let mins = (secs % 3600) / 60;
                let secs = secs % 60;
                format!("{:02}:{:02}:{:02}.{:03}", hours, mins, secs, millis)
            })
            .unwrap_or_else(|_| "??:??:??.???".to_string())
    }
}

impl LogSink for FileSink {
    fn emit(&self, record: &LogRecord) {
        // Write failures are swallowed per the dispatch contract
        let mut file = self.file.lock();
        let _ = writeln!(file, "[{}] {}", Self::timestamp(), record);
        let _ = file.flush();
    }
}
