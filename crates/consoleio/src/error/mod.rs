//! Error types and the [`ErrorBoundary`] reporter.
//!
//! Invalid menu answers are never errors: prompts report them on the console
//! and ask again. What reaches callers is I/O failure, closed input, or a file
//! no candidate encoding could decode.

mod boundary;

pub use boundary::ErrorBoundary;

use std::io;
use std::path::PathBuf;

/// Result type for consoleio operations.
pub type Result<T> = std::result::Result<T, ConsoleIoError>;

/// Errors surfaced by prompts and file helpers.
#[derive(Debug)]
pub enum ConsoleIoError {
    /// Reading or writing failed (missing file, permission denied, broken pipe).
    Io(io::Error),
    /// The input stream ended while a prompt was waiting for an answer.
    InputClosed,
    /// Every candidate encoding failed to decode the file.
    Undecodable {
        /// File that could not be decoded.
        path: PathBuf,
    },
}

impl ConsoleIoError {
    /// Whether this is an I/O error of the given kind.
    #[must_use]
    pub fn is_io_kind(&self, kind: io::ErrorKind) -> bool {
        matches!(self, Self::Io(e) if e.kind() == kind)
    }
}

impl std::fmt::Display for ConsoleIoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsoleIoError::Io(e) => write!(f, "I/O error: {e}"),
            ConsoleIoError::InputClosed => write!(f, "Input closed before an answer was given"),
            ConsoleIoError::Undecodable { path } => {
                write!(f, "Could not decode {} with any known encoding", path.display())
            }
        }
    }
}

impl std::error::Error for ConsoleIoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConsoleIoError::Io(e) => Some(e),
            ConsoleIoError::InputClosed | ConsoleIoError::Undecodable { .. } => None,
        }
    }
}

impl From<io::Error> for ConsoleIoError {
    fn from(err: io::Error) -> Self {
        ConsoleIoError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ConsoleIoError::InputClosed.to_string(),
            "Input closed before an answer was given"
        );
        let err = ConsoleIoError::Undecodable {
            path: PathBuf::from("notes.txt"),
        };
        assert!(err.to_string().contains("notes.txt"));
    }

    #[test]
    fn test_from_io_keeps_source() {
        let err: ConsoleIoError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(err.is_io_kind(io::ErrorKind::NotFound));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn test_non_io_has_no_source() {
        assert!(ConsoleIoError::InputClosed.source().is_none());
        assert!(!ConsoleIoError::InputClosed.is_io_kind(io::ErrorKind::NotFound));
    }
}
