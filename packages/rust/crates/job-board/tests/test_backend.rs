#![allow(missing_docs)]

use job_board::{FileLineStore, JobLineStore, MemoryLineStore, StoreConfig};
use tempfile::TempDir;

fn file_backend(dir: &TempDir) -> FileLineStore {
    FileLineStore::new(&StoreConfig::at(dir.path().join("jobs.txt")))
}

#[test]
fn missing_file_reads_as_empty_store() {
    let dir = TempDir::new().unwrap();
    let backend = file_backend(&dir);
    assert!(backend.read_all().unwrap().is_empty());
    assert!(!backend.path().exists());
}

#[test]
fn append_then_read_all() {
    let dir = TempDir::new().unwrap();
    let backend = file_backend(&dir);
    backend.append(b"A1_,X\n").unwrap();
    backend.append(b"B2_,Y\n").unwrap();
    assert_eq!(
        backend.read_all().unwrap(),
        vec![b"A1_,X".to_vec(), b"B2_,Y".to_vec()]
    );
}

#[test]
fn write_all_terminates_every_line() {
    let dir = TempDir::new().unwrap();
    let backend = file_backend(&dir);
    backend
        .write_all(&[b"A1_,X".to_vec(), Vec::new(), b"B2_,Y".to_vec()])
        .unwrap();
    assert_eq!(std::fs::read(backend.path()).unwrap(), b"A1_,X\n\nB2_,Y\n");
    assert_eq!(
        backend.read_all().unwrap(),
        vec![b"A1_,X".to_vec(), Vec::new(), b"B2_,Y".to_vec()]
    );
}

#[test]
fn crlf_lines_read_without_carriage_returns() {
    let dir = TempDir::new().unwrap();
    let backend = file_backend(&dir);
    std::fs::write(backend.path(), "A1_,X\r\nB2_,Y\r\n").unwrap();
    assert_eq!(
        backend.read_all().unwrap(),
        vec![b"A1_,X".to_vec(), b"B2_,Y".to_vec()]
    );
}

#[test]
fn nul_and_non_utf8_bytes_read_back_verbatim() {
    let dir = TempDir::new().unwrap();
    let backend = file_backend(&dir);
    std::fs::write(backend.path(), b"A1_,a\x00b\nB2_,caf\xe9\n").unwrap();
    assert_eq!(
        backend.read_all().unwrap(),
        vec![b"A1_,a\x00b".to_vec(), b"B2_,caf\xe9".to_vec()]
    );
}

#[test]
fn rewrite_preserves_bytes_it_did_not_author() {
    let dir = TempDir::new().unwrap();
    let backend = file_backend(&dir);
    std::fs::write(backend.path(), b"A1_,x\nB2_,caf\xe9\n").unwrap();
    let lines = backend.read_all().unwrap();
    backend.write_all(&lines).unwrap();
    assert_eq!(std::fs::read(backend.path()).unwrap(), b"A1_,x\nB2_,caf\xe9\n");
}

#[test]
fn read_limit_is_inclusive_and_optional() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("jobs.txt");
    std::fs::write(&path, b"A1_,X\n").unwrap();

    let at_limit = FileLineStore::new(&StoreConfig {
        path: path.clone(),
        max_bytes: Some(6),
    });
    assert_eq!(at_limit.read_all().unwrap().len(), 1);

    let under_limit = FileLineStore::new(&StoreConfig {
        path: path.clone(),
        max_bytes: Some(5),
    });
    assert!(under_limit.read_all().is_err());

    let unlimited = FileLineStore::new(&StoreConfig::at(&path));
    assert_eq!(unlimited.read_all().unwrap().len(), 1);
}

#[test]
fn memory_store_accepts_str_and_byte_lines() {
    let store = MemoryLineStore::with_lines(vec![b"A1_,caf\xe9".to_vec()]);
    store.append(b"B2_,Y\n").unwrap();
    assert_eq!(
        store.read_all().unwrap(),
        vec![b"A1_,caf\xe9".to_vec(), b"B2_,Y".to_vec()]
    );
}

#[test]
fn backend_names() {
    let dir = TempDir::new().unwrap();
    assert_eq!(file_backend(&dir).backend_name(), "file");
    assert_eq!(MemoryLineStore::new().backend_name(), "memory");
}
