//! Unified error types for linkpulse.
//!
//! This module provides a single [`LinkpulseError`] enum that covers all error
//! cases in the library.
//!
//! # Error Handling Philosophy
//!
//! The engine itself is tolerant: malformed chat lines, unresolved senders and
//! out-of-window reactions are normal outcomes reflected in the shape of the
//! result. Only caller contract violations ([`LinkpulseError::InvalidInput`])
//! and the I/O around the engine (roster files, output writers) fail.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for linkpulse operations.
///
/// # Example
///
/// ```rust
/// use linkpulse::error::Result;
/// use linkpulse::Roster;
///
/// fn load() -> Result<Roster> {
///     Ok(Roster::default())
/// }
/// ```
pub type Result<T> = std::result::Result<T, LinkpulseError>;

/// The error type for all linkpulse operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LinkpulseError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The chat or roster file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The caller handed the engine input that breaks its contract.
    ///
    /// Raised before any parsing begins, for example when a roster entry has
    /// a blank name or two entries share an id. No partial result exists.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of what's wrong
        message: String,
    },

    /// A file or format name doesn't match the expected structure.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// The chat export exceeds the configured size ceiling.
    #[error("Chat export too large: {actual_size} bytes (maximum: {max_size} bytes)")]
    InputTooLarge {
        /// Maximum allowed size in bytes
        max_size: usize,
        /// Actual size encountered
        actual_size: usize,
    },

    /// CSV reading/writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON parsing/serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl LinkpulseError {
    /// Creates an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        LinkpulseError::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        LinkpulseError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an input-too-large error.
    pub fn input_too_large(max_size: usize, actual_size: usize) -> Self {
        LinkpulseError::InputTooLarge {
            max_size,
            actual_size,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, LinkpulseError::Io(_))
    }

    /// Returns `true` if this is a caller contract violation.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, LinkpulseError::InvalidInput { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, LinkpulseError::InvalidFormat { .. })
    }
}
