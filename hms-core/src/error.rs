//! Error types for the record store

use thiserror::Error;

/// Result type alias using hms-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the record store
#[derive(Debug, Error)]
pub enum Error {
    // ============ Store Errors ============
    /// A record file could not be opened or written for append
    #[error("Unable to append to {file}: {source}")]
    RecordWrite {
        /// File name relative to the data directory
        file: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A record file exists but could not be opened for reading
    #[error("Unable to read {file}: {source}")]
    RecordRead {
        /// File name relative to the data directory
        file: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Typed append with the wrong number of fields
    #[error("Field count mismatch for {file}: expected {expected}, got {actual}")]
    FieldCount {
        /// File name of the schema
        file: String,
        /// Fields the schema declares
        expected: usize,
        /// Fields supplied by the caller
        actual: usize,
    },

    // ============ Configuration Errors ============
    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),

    // ============ System Errors ============
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============ Generic Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Any other error
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Create a new append failure for `file`
    pub fn record_write(file: impl Into<String>, source: std::io::Error) -> Self {
        Self::RecordWrite {
            file: file.into(),
            source,
        }
    }

    /// Create a new read failure for `file`
    pub fn record_read(file: impl Into<String>, source: std::io::Error) -> Self {
        Self::RecordRead {
            file: file.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Name of the record file involved, if any
    pub fn file(&self) -> Option<&str> {
        match self {
            Self::RecordWrite { file, .. }
            | Self::RecordRead { file, .. }
            | Self::FieldCount { file, .. } => Some(file),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_error_names_file() {
        let err = Error::record_write(
            "patients.txt",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.file(), Some("patients.txt"));
        assert_eq!(err.to_string(), "Unable to append to patients.txt: denied");
    }

    #[test]
    fn test_config_error_has_no_file() {
        let err = Error::config("bad yaml");
        assert!(err.file().is_none());
        assert_eq!(err.to_string(), "Configuration error: bad yaml");
    }
}
