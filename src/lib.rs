/*!
 * # Galleria - demo gallery manifests for a media showcase
 *
 * A Rust library for turning demo assets into the JSON manifests a gallery
 * front end reads.
 *
 * ## Features
 *
 * - Parse subtitle cues into sentence segments with speaker labels
 * - Normalize recognizer word lists from JSON or permissive literal dumps
 * - Attach word-level timing to each sentence
 * - Split edit-annotated transcripts (`【before】/【after】`) into diff spans
 * - Build speech recognition, speech editing and speaker diarization
 *   manifests from fixed demo directory layouts
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `transcript`: Timed transcript preparation:
 *   - `transcript::timing`: Time code parsing
 *   - `transcript::subtitles`: Cue blocks to segments
 *   - `transcript::words`: Word list normalization
 *   - `transcript::aligner`: Word-to-segment alignment
 * - `editing`: Diff marker parsing
 * - `manifest`: Gallery manifest builders
 * - `app_config`: Configuration management
 * - `file_utils`: File system operations
 * - `language_utils`: Language label lookup
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod editing;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod manifest;
pub mod transcript;

// Re-export main types for easier usage
pub use app_config::{Config, Gallery};
pub use editing::{DiffSegment, EditDocument, parse_edit_markers};
pub use errors::{AppError, ManifestError, TimecodeError, TranscriptError};
pub use transcript::{Aligner, Diagnostics, Segment, TimeRange, Word};
