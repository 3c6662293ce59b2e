/*!
 * Error types for the galleria application.
 *
 * The transcript and diff parsers are lenient and never fail on malformed
 * input; these errors cover the strict variants, the file collaborators,
 * and the manifest builders, using the thiserror crate for ergonomic
 * error definitions.
 */

use thiserror::Error;

/// Errors raised by the strict timestamp parser
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimecodeError {
    /// No `HH:MM:SS,mmm` time code could be found in the input
    #[error("Unparsable time code: '{0}'")]
    Unparsable(String),

    /// A time code component did not fit the numeric type
    #[error("Time code component out of range in '{0}'")]
    OutOfRange(String),
}

/// Errors that can occur while preparing transcript data
#[derive(Error, Debug)]
pub enum TranscriptError {
    /// The word data file was neither JSON nor a permissive literal object
    #[error("Failed to decode word data: {0}")]
    Decode(String),

    /// Segments are not in chronological order
    #[error("Segment {index} starts at {start:.3}s, before the previous segment at {previous:.3}s")]
    UnorderedSegments {
        /// Position of the offending segment
        index: usize,
        /// Its start time in seconds
        start: f64,
        /// Start time of the segment before it
        previous: f64,
    },

    /// Words are not in chronological order
    #[error("Word {index} starts at {start:.3}s, before the previous word at {previous:.3}s")]
    UnorderedWords {
        /// Position of the offending word
        index: usize,
        /// Its start time in seconds
        start: f64,
        /// Start time of the word before it
        previous: f64,
    },
}

/// Errors that can occur while building a gallery manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    /// The gallery data directory does not exist
    #[error("Demo directory not found: {0}")]
    MissingDirectory(String),

    /// A demo asset could not be read
    #[error("Failed to read {path}: {message}")]
    Read {
        /// Path of the asset
        path: String,
        /// Underlying error message
        message: String,
    },

    /// Error from transcript preparation
    #[error("Transcript error: {0}")]
    Transcript(#[from] TranscriptError),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from configuration loading or validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from transcript preparation
    #[error("Transcript error: {0}")]
    Transcript(#[from] TranscriptError),

    /// Error from a manifest builder
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
