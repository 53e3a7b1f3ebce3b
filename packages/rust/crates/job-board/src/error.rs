//! Error types for job record operations.

use job_io::IoError;

use crate::record::ExperienceLevel;
use thiserror::Error;

/// Why an add, update or delete was refused.
///
/// `Display` is the operator-facing reason, e.g. `Invalid date format.`
#[derive(Error, Debug)]
pub enum JobError {
    /// A required field is empty, or the skill list is.
    #[error("All fields must be filled ({0} is empty).")]
    MissingField(&'static str),

    /// Job number is not alphanumerics plus a trailing underscore.
    #[error("Invalid job number format.")]
    InvalidJobNumberFormat,

    /// Add of a job number that is already stored.
    #[error("Job with the same number already exists.")]
    DuplicateJobNumber,

    /// Update or delete of a job number that is not stored.
    #[error("Job does not exist.")]
    JobNotFound,

    /// Posted date is not `YYYY-MM-DD`.
    #[error("Invalid date format.")]
    InvalidDateFormat,

    /// Poster address lacks a word followed by ", ".
    #[error("Invalid address format.")]
    InvalidAddressFormat,

    /// Salary under the minimum for the experience level.
    #[error("Invalid salary for the job level ({level} requires at least {floor}).")]
    SalaryBelowFloorForLevel {
        /// Level whose floor was missed.
        level: ExperienceLevel,
        /// The floor.
        floor: i64,
    },

    /// Job type not offered at the experience level.
    #[error("Invalid job type for the job level.")]
    JobTypeNotAllowedForLevel,

    /// A skill contains characters other than letters, digits, whitespace or commas.
    #[error("Invalid skills format.")]
    InvalidSkillFormat,

    /// Salary is zero or negative.
    #[error("Salary must be greater than 0.")]
    NonPositiveSalary,

    /// Reading or writing the backing store failed.
    #[error(transparent)]
    Storage(#[from] IoError),
}

impl JobError {
    /// True for rule violations, false for storage failures.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}

/// Result alias for job record operations.
pub type Result<T, E = JobError> = std::result::Result<T, E>;
