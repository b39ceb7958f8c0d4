//! Error types for submission operations.
//!
//! Failures are surfaced to the caller as-is; nothing here retries.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for writing and reading submission files.
///
/// # Examples
///
/// ```
/// use submission::error::SubmissionError;
///
/// let err = SubmissionError::UnexpectedHeader {
///     expected: ",Id,prediction".to_string(),
///     found: "id,label".to_string(),
/// };
/// assert!(err.to_string().contains("Unexpected header"));
/// ```
#[derive(Error, Debug)]
pub enum SubmissionError {
    /// Destination or source file could not be opened.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File the operation targeted
        path: PathBuf,
        /// Underlying OS error
        #[source]
        source: std::io::Error,
    },

    /// CSV encoding or decoding failed (includes write failures such as a full disk).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Header row does not describe a submission table.
    #[error("Unexpected header: expected {expected}, found {found}")]
    UnexpectedHeader {
        /// Header this crate writes
        expected: String,
        /// Header found in the file
        found: String,
    },

    /// A data row breaks the Id/index layout.
    #[error("Malformed row at line {line}: {message}")]
    MalformedRow {
        /// 1-based line number in the file
        line: usize,
        /// What was wrong with the row
        message: String,
    },
}

impl SubmissionError {
    /// Create an I/O error bound to the path it occurred on
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a malformed row error
    #[must_use]
    pub fn malformed_row(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedRow {
            line,
            message: message.into(),
        }
    }
}

impl From<SubmissionError> for std::io::Error {
    fn from(err: SubmissionError) -> Self {
        match err {
            SubmissionError::Io { source, .. } => source,
            other => std::io::Error::new(std::io::ErrorKind::InvalidData, other),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, SubmissionError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_io_error_display_includes_path() {
        let err = SubmissionError::io(
            "/missing/out.csv",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/missing/out.csv"));
        assert!(msg.contains("no such directory"));
    }

    #[test]
    fn test_io_error_source_is_preserved() {
        let err = SubmissionError::io(
            "out.csv",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let source = err.source().expect("io error has a source");
        assert_eq!(source.to_string(), "denied");
    }

    #[test]
    fn test_malformed_row_display() {
        let err = SubmissionError::malformed_row(3, "Id 5 out of sequence");
        assert_eq!(
            err.to_string(),
            "Malformed row at line 3: Id 5 out of sequence"
        );
    }

    #[test]
    fn test_into_io_error_keeps_kind() {
        let err = SubmissionError::io(
            "out.csv",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let io: std::io::Error = err.into();
        assert_eq!(io.kind(), std::io::ErrorKind::PermissionDenied);

        let io: std::io::Error = SubmissionError::malformed_row(2, "bad").into();
        assert_eq!(io.kind(), std::io::ErrorKind::InvalidData);
    }
}
