//! Console session errors

use thiserror::Error;

/// Errors that end a console session
#[derive(Error, Debug)]
pub enum PortalError {
    /// Input reached end of file; treated as a request to exit
    #[error("Console input closed")]
    InputClosed,

    /// Reading from or writing to the terminal failed
    #[error("Console IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using the portal error
pub type Result<T> = std::result::Result<T, PortalError>;
