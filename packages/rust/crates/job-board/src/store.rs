//! Validated add / update / delete of job records over a line store.

use std::fmt;

use crate::backend::{FileLineStore, JobLineStore};
use crate::error::{JobError, Result};
use crate::record::{FIELD_DELIMITER, JobRecord};
use crate::rules;
use crate::settings::StoreConfig;

/// The three mutating operations, for status reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobOperation {
    /// Append a new record.
    Add,
    /// Replace an existing record.
    Update,
    /// Remove a record by job number.
    Delete,
}

impl JobOperation {
    const fn gerund(self) -> &'static str {
        match self {
            Self::Add => "adding",
            Self::Update => "updating",
            Self::Delete => "deleting",
        }
    }

    const fn past(self) -> &'static str {
        match self {
            Self::Add => "added",
            Self::Update => "updated",
            Self::Delete => "deleted",
        }
    }
}

impl fmt::Display for JobOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Add => "add",
            Self::Update => "update",
            Self::Delete => "delete",
        })
    }
}

/// Operator-facing text for the outcome of `operation`.
///
/// `Job added successfully.` or `Error adding job: <reason>`.
#[must_use]
pub fn status_message(operation: JobOperation, result: &Result<()>) -> String {
    match result {
        Ok(()) => format!("Job {} successfully.", operation.past()),
        Err(error) => format!("Error {} job: {error}", operation.gerund()),
    }
}

/// Job records keyed by job number, persisted one line each.
///
/// Every operation reads or writes the backend within the call; nothing is
/// cached between calls. There is no locking across operations, so concurrent
/// writers can lose updates.
#[derive(Debug)]
pub struct JobRecordStore<B: JobLineStore = FileLineStore> {
    backend: B,
}

impl JobRecordStore<FileLineStore> {
    /// File-backed store described by `config`.
    #[must_use]
    pub fn open(config: &StoreConfig) -> Self {
        Self::with_backend(FileLineStore::new(config))
    }
}

impl<B: JobLineStore> JobRecordStore<B> {
    /// Store over an arbitrary backend.
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// The underlying line store.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Whether any stored line starts with `job_number` followed by a comma.
    ///
    /// # Errors
    ///
    /// [`JobError::Storage`] if the backend cannot be read.
    pub fn does_job_exist(&self, job_number: &str) -> Result<bool> {
        let lines = self.backend.read_all()?;
        Ok(lines.iter().any(|line| has_key(line, job_number)))
    }

    /// Checks run before an add, in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// The first rule the record breaks, or [`JobError::Storage`] if the
    /// duplicate check cannot read the store.
    pub fn validate_for_add(&self, record: &JobRecord) -> Result<()> {
        check_key(record)?;
        if self.does_job_exist(&record.job_number)? {
            return Err(JobError::DuplicateJobNumber);
        }
        check_content(record)
    }

    /// Checks run before an update: the add checks, with the existence test
    /// inverted.
    ///
    /// # Errors
    ///
    /// The first rule the record breaks, [`JobError::JobNotFound`], or
    /// [`JobError::Storage`].
    pub fn validate_for_update(&self, record: &JobRecord) -> Result<()> {
        check_key(record)?;
        if !self.does_job_exist(&record.job_number)? {
            return Err(JobError::JobNotFound);
        }
        check_content(record)
    }

    /// Checks run before a delete.
    ///
    /// # Errors
    ///
    /// [`JobError::InvalidJobNumberFormat`], [`JobError::JobNotFound`], or
    /// [`JobError::Storage`].
    pub fn validate_for_delete(&self, job_number: &str) -> Result<()> {
        if !rules::is_job_number_valid(job_number) {
            return Err(JobError::InvalidJobNumberFormat);
        }
        if !self.does_job_exist(job_number)? {
            return Err(JobError::JobNotFound);
        }
        Ok(())
    }

    /// Validate and append `record`.
    ///
    /// # Errors
    ///
    /// Any [`JobError`]; the store is untouched unless the append itself fails
    /// part way.
    pub fn try_add(&self, record: &JobRecord) -> Result<()> {
        self.validate_for_add(record)?;
        self.backend.append(record.to_line().as_bytes())?;
        Ok(())
    }

    /// Validate `record` and rewrite every line carrying its job number.
    ///
    /// # Errors
    ///
    /// Any [`JobError`]; nothing is written when validation fails.
    pub fn try_update(&self, record: &JobRecord) -> Result<()> {
        self.validate_for_update(record)?;
        let replacement = record.to_line();
        let replacement = replacement.trim_end_matches('\n').as_bytes();
        let lines: Vec<Vec<u8>> = self
            .backend
            .read_all()?
            .into_iter()
            .map(|line| {
                if has_key(&line, &record.job_number) {
                    replacement.to_vec()
                } else {
                    line
                }
            })
            .collect();
        self.backend.write_all(&lines)?;
        Ok(())
    }

    /// Remove every line carrying `job_number`.
    ///
    /// # Errors
    ///
    /// Any [`JobError`]; nothing is written when validation fails.
    pub fn try_delete(&self, job_number: &str) -> Result<()> {
        self.validate_for_delete(job_number)?;
        let lines: Vec<Vec<u8>> = self
            .backend
            .read_all()?
            .into_iter()
            .filter(|line| !has_key(line, job_number))
            .collect();
        self.backend.write_all(&lines)?;
        Ok(())
    }

    /// Add `record`, reporting the outcome. Returns whether it was stored.
    pub fn add(&self, record: &JobRecord) -> bool {
        let result = self.try_add(record);
        self.report(JobOperation::Add, &record.job_number, &result)
    }

    /// Update `record`, reporting the outcome. Returns whether it was stored.
    pub fn update(&self, record: &JobRecord) -> bool {
        let result = self.try_update(record);
        self.report(JobOperation::Update, &record.job_number, &result)
    }

    /// Delete `job_number`, reporting the outcome. Returns whether lines were removed.
    pub fn delete(&self, job_number: &str) -> bool {
        let result = self.try_delete(job_number);
        self.report(JobOperation::Delete, job_number, &result)
    }

    fn report(&self, operation: JobOperation, job_number: &str, result: &Result<()>) -> bool {
        let message = status_message(operation, result);
        let backend = self.backend.backend_name();
        match result {
            Ok(()) => tracing::info!(%operation, job_number, backend, "{message}"),
            Err(error) if error.is_validation() => {
                tracing::warn!(%operation, job_number, backend, "{message}");
            }
            Err(_) => tracing::error!(%operation, job_number, backend, "{message}"),
        }
        result.is_ok()
    }
}

/// `line` is a record for `job_number`: the key, then the field delimiter.
/// Bytes after the delimiter are never inspected.
fn has_key(line: &[u8], job_number: &str) -> bool {
    line.strip_prefix(job_number.as_bytes())
        .is_some_and(|rest| rest.starts_with(FIELD_DELIMITER.as_bytes()))
}

fn check_key(record: &JobRecord) -> Result<()> {
    if let Some(field) = rules::first_missing_field(record) {
        return Err(JobError::MissingField(field));
    }
    if !rules::is_job_number_valid(&record.job_number) {
        return Err(JobError::InvalidJobNumberFormat);
    }
    Ok(())
}

fn check_content(record: &JobRecord) -> Result<()> {
    if !rules::is_date_valid(&record.job_posted_date) {
        return Err(JobError::InvalidDateFormat);
    }
    if !rules::is_address_valid(&record.job_poster_address) {
        return Err(JobError::InvalidAddressFormat);
    }
    if let Some((level, floor)) = rules::salary_shortfall(record) {
        return Err(JobError::SalaryBelowFloorForLevel { level, floor });
    }
    if !rules::is_job_type_valid_for_level(record) {
        return Err(JobError::JobTypeNotAllowedForLevel);
    }
    if !rules::are_skills_valid(&record.job_required_skills) {
        return Err(JobError::InvalidSkillFormat);
    }
    if record.job_salary <= 0 {
        return Err(JobError::NonPositiveSalary);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_key_needs_the_delimiter() {
        assert!(has_key(b"A1_,X", "A1_"));
        assert!(has_key(b"A1_,", "A1_"));
        assert!(!has_key(b"A1_", "A1_"));
        assert!(!has_key(b"A1_X,Y", "A1_"));
        assert!(!has_key(b"B2_,A1_", "A1_"));
    }

    #[test]
    fn has_key_ignores_bytes_after_the_key() {
        assert!(has_key(b"A1_,caf\xe9\0", "A1_"));
    }
}
