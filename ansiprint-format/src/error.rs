//! Error types for ansiprint

use std::path::PathBuf;
use thiserror::Error;

/// ansiprint error types
#[derive(Debug, Error)]
pub enum PrintError {
    /// Requested buffer capacity cannot be used.
    #[error("Invalid buffer size {size}: {reason}")]
    InvalidBufferSize {
        /// Capacity that was requested.
        size: usize,
        /// Why it was rejected.
        reason: &'static str,
    },
    /// Flags or arguments do not form a usable configuration.
    #[error("Usage error: {0}")]
    Usage(String),
    /// A named input file could not be opened.
    #[error("Cannot open {}: {source}", .path.display())]
    OpenSource {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },
    /// The output device could not be opened.
    #[error("Cannot open output device {device}: {source}")]
    OpenSink {
        /// Device that failed to open.
        device: String,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },
    /// I/O operation failed while copying.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PrintError {
    /// True for errors detected before any output was produced.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            PrintError::InvalidBufferSize { .. } | PrintError::Usage(_)
        )
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PrintError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn open_source_message_names_path() {
        let err = PrintError::OpenSource {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        let message = err.to_string();
        assert!(message.contains("missing.txt"));
        assert!(message.contains("No such file"));
        assert!(!err.is_configuration_error());
    }

    #[test]
    fn configuration_errors_are_classified() {
        let err = PrintError::InvalidBufferSize {
            size: 0,
            reason: "must be positive",
        };
        assert!(err.is_configuration_error());
        assert!(PrintError::Usage("no files".into()).is_configuration_error());
        assert!(!PrintError::Io(io::Error::other("boom")).is_configuration_error());
    }
}
