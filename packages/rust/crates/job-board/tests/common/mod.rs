//! Shared test helpers for job-board.

#![allow(dead_code)]

use std::path::PathBuf;

use job_board::{FileLineStore, JobLineStore, JobRecord, JobRecordStore, StoreConfig};
use tempfile::TempDir;

/// The reference record: a Junior, Full-time listing paying 31000.
pub fn sample_record() -> JobRecord {
    JobRecord {
        job_number: "A1_".to_string(),
        job_title: "X".to_string(),
        job_poster_name: "Y".to_string(),
        job_poster_address: "1 St, Town".to_string(),
        job_posted_date: "2024-01-01".to_string(),
        job_experience_level: "Junior".to_string(),
        job_type: "Full-time".to_string(),
        job_required_skills: vec!["Go".to_string()],
        job_salary: 31_000,
        job_description: "d".to_string(),
    }
}

/// Sample record under a different job number.
pub fn record_numbered(job_number: &str) -> JobRecord {
    JobRecord {
        job_number: job_number.to_string(),
        ..sample_record()
    }
}

/// File-backed store in a fresh temp dir. Keep the `TempDir` alive.
pub fn file_store() -> (TempDir, PathBuf, JobRecordStore<FileLineStore>) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("jobs.txt");
    let store = JobRecordStore::open(&StoreConfig::at(&path));
    (dir, path, store)
}

/// Store file content, or empty if it was never created.
pub fn read_store(path: &PathBuf) -> String {
    std::fs::read_to_string(path).unwrap_or_default()
}

/// Raw store file bytes, or empty if it was never created.
pub fn read_store_bytes(path: &PathBuf) -> Vec<u8> {
    std::fs::read(path).unwrap_or_default()
}

/// Every stored line, decoded for comparison against literals.
pub fn stored_lines<B: JobLineStore>(store: &JobRecordStore<B>) -> Vec<String> {
    store
        .backend()
        .read_all()
        .unwrap()
        .into_iter()
        .map(|line| String::from_utf8(line).unwrap())
        .collect()
}
