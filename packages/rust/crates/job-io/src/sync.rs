//! Size-limited synchronous reads.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::IoError;

/// Read a whole file as raw bytes, optionally refusing oversized content.
///
/// No decoding happens here: callers that rewrite the file get back exactly
/// the bytes that were stored. `max_bytes` of `None` means unlimited; a limit
/// is inclusive.
///
/// # Errors
///
/// - [`IoError::NotFound`] if the path cannot be stat'ed
/// - [`IoError::TooLarge`] if the file is bigger than `max_bytes`
/// - [`IoError::Access`] for any other read failure
pub fn read_bytes_safe<P: AsRef<Path>>(
    path: P,
    max_bytes: Option<u64>,
) -> Result<Vec<u8>, IoError> {
    let path = path.as_ref();

    let metadata = fs::metadata(path).map_err(|_| IoError::NotFound(path.to_path_buf()))?;

    if let Some(limit) = max_bytes
        && metadata.len() > limit
    {
        return Err(IoError::TooLarge {
            path: path.to_path_buf(),
            len: metadata.len(),
            limit,
        });
    }

    let mut file = fs::File::open(path).map_err(IoError::access("open", path))?;
    let mut buffer = Vec::with_capacity(usize::try_from(metadata.len()).unwrap_or_default());
    file.read_to_end(&mut buffer)
        .map_err(IoError::access("read", path))?;

    tracing::debug!(path = %path.display(), bytes = buffer.len(), "read file");
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_file_reads_as_empty_buffer() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("jobs.txt");
        fs::write(&p, "").unwrap();
        assert!(read_bytes_safe(&p, Some(0)).unwrap().is_empty());
    }

    #[test]
    fn limit_is_inclusive() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("jobs.txt");
        fs::write(&p, "0123456789").unwrap();
        assert!(read_bytes_safe(&p, Some(10)).is_ok());
        assert!(matches!(
            read_bytes_safe(&p, Some(9)),
            Err(IoError::TooLarge { len: 10, limit: 9, .. })
        ));
    }

    #[test]
    fn no_limit_reads_everything() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("jobs.txt");
        fs::write(&p, vec![b'x'; 4096]).unwrap();
        assert_eq!(read_bytes_safe(&p, None).unwrap().len(), 4096);
    }
}
