//! Byte-exact splitting and joining of newline-terminated lines.
//!
//! Lines are kept as raw bytes so content that is not valid UTF-8 survives a
//! read-modify-write cycle untouched.

use memchr::memchr_iter;

/// Split `buffer` on `\n`, dropping the terminator and a `\r` before it.
///
/// A final line without a terminator is kept; a trailing terminator does not
/// produce an empty last line.
#[must_use]
pub fn split_lines(buffer: &[u8]) -> Vec<Vec<u8>> {
    let mut lines = Vec::new();
    let mut start = 0;
    for end in memchr_iter(b'\n', buffer) {
        lines.push(strip_cr(&buffer[start..end]).to_vec());
        start = end + 1;
    }
    if start < buffer.len() {
        lines.push(strip_cr(&buffer[start..]).to_vec());
    }
    lines
}

/// Concatenate `lines`, terminating each with `\n`.
#[must_use]
pub fn join_lines(lines: &[Vec<u8>]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(lines.iter().map(|line| line.len() + 1).sum());
    for line in lines {
        buffer.extend_from_slice(line);
        buffer.push(b'\n');
    }
    buffer
}

fn strip_cr(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unterminated_last_line_is_kept() {
        assert_eq!(split_lines(b"A1_,X\nB2_"), vec![b"A1_,X".to_vec(), b"B2_".to_vec()]);
    }

    #[test]
    fn invalid_utf8_passes_through() {
        let lines = split_lines(b"B2_,caf\xe9\n");
        assert_eq!(join_lines(&lines), b"B2_,caf\xe9\n".to_vec());
    }
}
