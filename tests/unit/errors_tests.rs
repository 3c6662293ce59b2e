/*!
 * Tests for error types and conversions
 */

use galleria::errors::{AppError, ManifestError, TimecodeError, TranscriptError};
use galleria::transcript::load_word_data;

#[test]
fn test_transcriptError_unorderedSegments_shouldDisplayPosition() {
    let error = TranscriptError::UnorderedSegments {
        index: 3,
        start: 1.5,
        previous: 2.25,
    };
    let display = format!("{}", error);
    assert!(display.contains("Segment 3"));
    assert!(display.contains("1.500s"));
    assert!(display.contains("2.250s"));
}

#[test]
fn test_timecodeError_unparsable_shouldQuoteInput() {
    let error = TimecodeError::Unparsable("soon".to_string());
    assert_eq!(format!("{}", error), "Unparsable time code: 'soon'");
}

#[test]
fn test_appError_fromTranscriptError_shouldWrapAsTranscript() {
    let decode_error = load_word_data("{'words': [").unwrap_err();
    let app_error: AppError = decode_error.into();

    assert!(matches!(app_error, AppError::Transcript(TranscriptError::Decode(_))));
    assert!(format!("{}", app_error).starts_with("Transcript error: Failed to decode word data"));
}

#[test]
fn test_appError_fromManifestError_shouldWrapAsManifest() {
    let error: AppError = ManifestError::MissingDirectory("demos/x".to_string()).into();
    assert!(matches!(error, AppError::Manifest(ManifestError::MissingDirectory(_))));
    assert!(format!("{}", error).contains("demos/x"));
}

#[test]
fn test_appError_fromAnyhowAndIo_shouldMapToUnknownAndFile() {
    let from_anyhow: AppError = anyhow::anyhow!("boom").into();
    assert!(matches!(from_anyhow, AppError::Unknown(ref message) if message == "boom"));

    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing words.json");
    let from_io: AppError = io.into();
    assert!(matches!(from_io, AppError::File(ref message) if message.contains("missing words.json")));
}
