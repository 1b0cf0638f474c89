//! Error types for btuuid.

use thiserror::Error;

/// Main error type for btuuid operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Error decoding a binary wire-format UUID
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// Error validating a textual UUID or a registry row
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Errors related to binary wire decoding.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// Wire field length is not one of the three defined widths.
    ///
    /// The width of a UUID field is dictated by the enclosing protocol
    /// structure, so hitting this normally means the caller sliced the
    /// buffer wrong rather than that the capture is corrupt.
    #[error("invalid UUID wire width: {width} bytes (expected 2, 4, or 16)")]
    InvalidWidth { width: usize },
}

/// Errors related to textual UUID and registry row validation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The identifier field was empty after trimming
    #[error("UUID must not be empty")]
    EmptyIdentifier,

    /// The label field was empty after trimming
    #[error("label must not be empty")]
    EmptyLabel,

    /// Wrong length, non-hex digit, or misplaced hyphen
    #[error("UUID must be 2, 4, or 16 bytes, textual form 4/8/36 characters")]
    MalformedIdentifier,
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
