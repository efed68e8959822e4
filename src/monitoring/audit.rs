//! Append-only audit trail
//!
//! Entries are timestamped text lines. The sink is injectable so the
//! driver and count service are testable without a real filesystem;
//! nothing in the service ever reads the trail back.

use crate::utils::error::{PurgeError, Result};
use parking_lot::Mutex;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Write-only sink for audit entries
pub trait AuditSink: Send + Sync {
    /// Append one entry; the sink adds the timestamp prefix
    fn append(&self, message: &str) -> Result<()>;
}

/// File-backed audit sink with exclusive-lock appends
///
/// Entries are written as `[YYYY-MM-DD HH:MM:SS] message` lines. The mutex
/// serializes concurrent appends from multiple request handlers so lines
/// never interleave.
pub struct FileAuditSink {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileAuditSink {
    /// Create a sink appending to the given path
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    /// Path this sink appends to
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AuditSink for FileAuditSink {
    fn append(&self, message: &str) -> Result<()> {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let entry = format!("[{}] {}\n", timestamp, message);

        let _guard = self.lock.lock();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| PurgeError::Audit(format!("cannot open {:?}: {}", self.path, e)))?;
        file.write_all(entry.as_bytes())
            .map_err(|e| PurgeError::Audit(format!("cannot append to {:?}: {}", self.path, e)))?;
        Ok(())
    }
}

/// In-memory audit sink for tests and in-process inspection
#[derive(Default)]
pub struct MemoryAuditSink {
    entries: Mutex<Vec<String>>,
}

impl MemoryAuditSink {
    /// Snapshot of all entries appended so far
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().clone()
    }
}

impl AuditSink for MemoryAuditSink {
    fn append(&self, message: &str) -> Result<()> {
        self.entries.lock().push(message.to_string());
        Ok(())
    }
}
