//! Custom error types for ROI encoding

use std::fmt;
use std::io;

/// ROI-specific error types
#[derive(Debug)]
pub enum RoiError {
    /// I/O error
    IoError(io::Error),
    /// Point count precondition violated for a geometry kind
    InvalidGeometry {
        /// Name of the geometry kind
        kind: &'static str,
        /// Expected point count, e.g. "exactly 4"
        expected: String,
        /// Point count actually supplied
        actual: usize,
    },
    /// Extra metadata tag is not exactly 4 bytes
    InvalidTagLength(usize),
    /// Extra metadata tag collides with a reserved block tag
    ReservedTag(String),
    /// Record kind the encoder intentionally does not produce
    NotSupported(&'static str),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for RoiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoiError::IoError(e) => write!(f, "I/O error: {}", e),
            RoiError::InvalidGeometry { kind, expected, actual } => write!(
                f,
                "Invalid point count for '{}' geometry: expected {}, got {}",
                kind, expected, actual
            ),
            RoiError::InvalidTagLength(len) => write!(
                f,
                "Invalid extra metadata tag length: {} (must be exactly 4 bytes)",
                len
            ),
            RoiError::ReservedTag(tag) => write!(
                f,
                "Extra metadata tag '{}' collides with a reserved block tag",
                tag
            ),
            RoiError::NotSupported(kind) => write!(f, "Writing {} records is not supported", kind),
            RoiError::GenericError(msg) => write!(f, "ROI error: {}", msg),
        }
    }
}

impl std::error::Error for RoiError {}

impl From<io::Error> for RoiError {
    fn from(error: io::Error) -> Self {
        RoiError::IoError(error)
    }
}

/// Result type for ROI operations
pub type RoiResult<T> = Result<T, RoiError>;

impl From<String> for RoiError {
    fn from(msg: String) -> Self {
        RoiError::GenericError(msg)
    }
}
