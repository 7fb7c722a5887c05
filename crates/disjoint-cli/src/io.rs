//! Input reading with a size cap and UTF-8 validation.
//!
//! `disjoint-core` never touches the filesystem; every byte of input enters
//! the binary through [`read_input`].
use std::io::{ErrorKind, Read as _};
use std::path::Path;

use crate::cli::PathOrStdin;
use crate::error::CliError;

/// Reads all of `source` into a `String`, refusing anything larger than
/// `max_size` bytes.
///
/// Disk files are checked via metadata before any read. Stdin is read
/// through `Read::take` with one byte of headroom, so an over-limit stream
/// is detected without buffering more than `max_size + 1` bytes.
///
/// # Errors
///
/// Returns a [`CliError`] with exit code 2 for missing or unreadable files,
/// over-limit input, stdin read failures, and invalid UTF-8.
pub fn read_input(source: &PathOrStdin, max_size: u64) -> Result<String, CliError> {
    let (label, bytes) = match source {
        PathOrStdin::Path(path) => (path.display().to_string(), read_file(path, max_size)?),
        PathOrStdin::Stdin => ("-".to_owned(), read_stdin(max_size)?),
    };
    log::debug!("read {} bytes from {label}", bytes.len());

    String::from_utf8(bytes).map_err(|e| CliError::InvalidUtf8 {
        input: label,
        byte_offset: e.utf8_error().valid_up_to(),
    })
}

fn read_file(path: &Path, max_size: u64) -> Result<Vec<u8>, CliError> {
    let size = std::fs::metadata(path)
        .map_err(|e| classify(&e, path))?
        .len();
    if size > max_size {
        return Err(CliError::FileTooLarge {
            input: path.display().to_string(),
            limit: max_size,
            actual: Some(size),
        });
    }
    std::fs::read(path).map_err(|e| classify(&e, path))
}

fn read_stdin(max_size: u64) -> Result<Vec<u8>, CliError> {
    let mut buf = Vec::new();
    std::io::stdin()
        .lock()
        .take(max_size.saturating_add(1))
        .read_to_end(&mut buf)
        .map_err(|e| CliError::StdinReadError {
            detail: e.to_string(),
        })?;
    if buf.len() as u64 > max_size {
        return Err(CliError::FileTooLarge {
            input: "-".to_owned(),
            limit: max_size,
            actual: None,
        });
    }
    Ok(buf)
}

/// Maps a filesystem error to the matching [`CliError`].
fn classify(e: &std::io::Error, path: &Path) -> CliError {
    let kind = e.kind();
    if kind == ErrorKind::NotFound {
        CliError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else if kind == ErrorKind::PermissionDenied {
        CliError::PermissionDenied {
            path: path.to_path_buf(),
        }
    } else {
        CliError::IoError {
            input: path.display().to_string(),
            detail: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]
    #![allow(clippy::wildcard_enum_match_arm)]

    use std::io::Write as _;
    use std::path::PathBuf;

    use super::*;

    fn temp_file_with(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().expect("create temp file");
        f.write_all(contents).expect("write temp file");
        f
    }

    #[test]
    fn reads_utf8_file() {
        let f = temp_file_with(b"A,B\nC\n");
        let source = PathOrStdin::Path(f.path().to_path_buf());
        assert_eq!(read_input(&source, 1024).expect("readable"), "A,B\nC\n");
    }

    #[test]
    fn file_exactly_at_limit_is_accepted() {
        let f = temp_file_with(b"A,B");
        let source = PathOrStdin::Path(f.path().to_path_buf());
        assert_eq!(read_input(&source, 3).expect("at limit"), "A,B");
    }

    #[test]
    fn file_over_limit_reports_actual_size() {
        let f = temp_file_with(b"A,B,10\n");
        let source = PathOrStdin::Path(f.path().to_path_buf());
        match read_input(&source, 4).expect_err("over limit") {
            CliError::FileTooLarge {
                actual: Some(n),
                limit,
                ..
            } => {
                assert_eq!(n, 7);
                assert_eq!(limit, 4);
            }
            other => panic!("expected FileTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn invalid_utf8_reports_offset() {
        let f = temp_file_with(&[b'A', b',', 0xFF]);
        let source = PathOrStdin::Path(f.path().to_path_buf());
        match read_input(&source, 1024).expect_err("bad UTF-8") {
            CliError::InvalidUtf8 { byte_offset, .. } => assert_eq!(byte_offset, 2),
            other => panic!("expected InvalidUtf8, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_not_found() {
        let source = PathOrStdin::Path(PathBuf::from("/no/such/dir/edges.csv"));
        let err = read_input(&source, 1024).expect_err("missing");
        assert!(matches!(err, CliError::FileNotFound { .. }));
        assert_eq!(err.exit_code(), 2);
    }
}
