#![allow(clippy::doc_markdown)]

//! job-io - Byte-exact file I/O for the job-board line store
//!
//! Small, synchronous file helpers used by the job record store.
//!
//! # Features
//!
//! - **Fidelity**: Byte-exact reads and line splitting, no decoding
//! - **Safety**: Optional size limit on reads
//! - **Durability**: Append with scoped handles, atomic rewrite via temp file + rename
//! - **Layout**: Project directory resolution (`PRJ_ROOT`, `PRJ_CONFIG_HOME`)
//!
//! # Architecture
//!
//! ```text
//! job-io/src/
//! ├── lib.rs      # Re-exports (this file)
//! ├── error.rs    # IoError enum
//! ├── sync.rs     # Size-limited reads
//! ├── lines.rs    # Byte-exact line split / join
//! ├── write.rs    # Append & atomic rewrite
//! └── dirs.rs     # Project directory resolution
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use job_io::{append_bytes, atomic_write_bytes, join_lines, read_bytes_safe, split_lines};
//!
//! append_bytes("jobs.txt", b"A1_,X,Y,1 St, Town,2024-01-01,Junior,Full-time,Go,31000,d\n")?;
//! let lines = split_lines(&read_bytes_safe("jobs.txt", None)?);
//! atomic_write_bytes("jobs.txt", &join_lines(&lines))?;
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod dirs;
mod error;
mod lines;
mod sync;
mod write;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use dirs::PrjDirs;
pub use error::IoError;
pub use lines::{join_lines, split_lines};
pub use sync::read_bytes_safe;
pub use write::{append_bytes, atomic_write_bytes};
