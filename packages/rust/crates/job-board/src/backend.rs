//! Line-store backends for job records.
//!
//! Lines are raw bytes. A rewrite hands back exactly what was read, so lines
//! the store did not author (other encodings, stray control bytes) survive
//! updates and deletes of other records.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use job_io::{IoError, append_bytes, atomic_write_bytes, join_lines, read_bytes_safe, split_lines};

use crate::settings::StoreConfig;

/// Ordered, line-oriented persistence behind a [`JobRecordStore`](crate::JobRecordStore).
///
/// Lines are passed without their trailing newline on read and write, except
/// for [`append`](Self::append) which takes a fully serialized line.
pub trait JobLineStore: Send + Sync {
    /// Backend identifier for logs.
    fn backend_name(&self) -> &'static str;

    /// Add one serialized line (newline included) at the end of the store.
    fn append(&self, line: &[u8]) -> Result<(), IoError>;

    /// Every line currently stored, in order.
    fn read_all(&self) -> Result<Vec<Vec<u8>>, IoError>;

    /// Replace the store with `lines`, in order.
    fn write_all(&self, lines: &[Vec<u8>]) -> Result<(), IoError>;
}

/// Text-file backed line store.
///
/// A missing file reads as an empty store; the first write creates it.
#[derive(Debug, Clone)]
pub struct FileLineStore {
    path: PathBuf,
    max_bytes: Option<u64>,
}

impl FileLineStore {
    /// Build a store over `config.path` with the configured read limit.
    #[must_use]
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            path: config.path.clone(),
            max_bytes: config.max_bytes,
        }
    }

    /// Backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl JobLineStore for FileLineStore {
    fn backend_name(&self) -> &'static str {
        "file"
    }

    fn append(&self, line: &[u8]) -> Result<(), IoError> {
        append_bytes(&self.path, line)
    }

    fn read_all(&self) -> Result<Vec<Vec<u8>>, IoError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = read_bytes_safe(&self.path, self.max_bytes)?;
        Ok(split_lines(&content))
    }

    fn write_all(&self, lines: &[Vec<u8>]) -> Result<(), IoError> {
        atomic_write_bytes(&self.path, &join_lines(lines))
    }
}

/// In-process line store. Not durable.
#[derive(Debug, Default)]
pub struct MemoryLineStore {
    lines: Mutex<Vec<Vec<u8>>>,
}

impl MemoryLineStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with `lines` (no trailing newlines).
    pub fn with_lines<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Vec<u8>>,
    {
        Self {
            lines: Mutex::new(lines.into_iter().map(Into::into).collect()),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Vec<u8>>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl JobLineStore for MemoryLineStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    fn append(&self, line: &[u8]) -> Result<(), IoError> {
        // A serialized line carries its own terminator; store it the way a file read would.
        self.lock().extend(split_lines(line));
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<Vec<u8>>, IoError> {
        Ok(self.lock().clone())
    }

    fn write_all(&self, lines: &[Vec<u8>]) -> Result<(), IoError> {
        *self.lock() = lines.to_vec();
        Ok(())
    }
}
