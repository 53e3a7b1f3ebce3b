#![allow(clippy::doc_markdown)]

//! job-board - Validated job listings persisted as comma-delimited lines.
//!
//! A [`JobRecordStore`] validates a [`JobRecord`] against a fixed set of
//! field rules and then appends it, rewrites it in place, or removes it from a
//! line-oriented store keyed by job number.
//!
//! # Architecture
//!
//! ```text
//! job-board/src/
//! ├── lib.rs       # Re-exports (this file)
//! ├── record.rs    # JobRecord, ExperienceLevel, line format
//! ├── rules.rs     # Field-format rules
//! ├── error.rs     # JobError enum
//! ├── backend.rs   # JobLineStore trait, file and memory backends
//! ├── store.rs     # JobRecordStore: add / update / delete
//! └── settings.rs  # YAML settings, StoreConfig
//! ```
//!
//! # Line format
//!
//! ```text
//! A1_,X,Y,1 St, Town,2024-01-01,Junior,Full-time,Go;Rust,31000,d
//! ```
//!
//! Fields in record order, skills joined by `;`. Values are not escaped.
//!
//! # Example
//!
//! ```rust,no_run
//! use job_board::{JobRecord, JobRecordStore, StoreConfig};
//!
//! let store = JobRecordStore::open(&StoreConfig::at("jobs.txt"));
//! let record = JobRecord {
//!     job_number: "A1_".into(),
//!     job_title: "X".into(),
//!     job_poster_name: "Y".into(),
//!     job_poster_address: "1 St, Town".into(),
//!     job_posted_date: "2024-01-01".into(),
//!     job_experience_level: "Junior".into(),
//!     job_type: "Full-time".into(),
//!     job_required_skills: vec!["Go".into()],
//!     job_salary: 31_000,
//!     job_description: "d".into(),
//! };
//! if store.add(&record) {
//!     store.delete("A1_");
//! }
//! ```

// ============================================================================
// Core modules
// ============================================================================

mod backend;
mod error;
mod record;
pub mod rules;
mod settings;
mod store;

// ============================================================================
// Public exports
// ============================================================================

pub use backend::{FileLineStore, JobLineStore, MemoryLineStore};
pub use error::{JobError, Result};
pub use record::{ExperienceLevel, FIELD_DELIMITER, JobRecord, SKILL_DELIMITER, leading_field};
pub use settings::{
    DEFAULT_STORE_PATH, JobBoardSettings, StoreConfig, StoreSettings, load_settings,
    load_settings_from_paths, settings_paths,
};
pub use store::{JobOperation, JobRecordStore, status_message};
