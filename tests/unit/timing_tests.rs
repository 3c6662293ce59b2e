/*!
 * Tests for time code parsing
 */

use galleria::TimecodeError;
use galleria::transcript::timing::{TimeRange, TimestampOutcome, parse_range_line, parse_timestamp, parse_timestamp_strict, round_millis};

/// Test the canonical subtitle time code
#[test]
fn test_parse_timestamp_withValidTimecode_shouldReturnSeconds() {
    assert_eq!(parse_timestamp("00:01:02,500"), 62.5);
    assert_eq!(parse_timestamp("  02:00:00,000  "), 7200.0);
}

/// Test that a time code embedded in other text is still found
#[test]
fn test_parse_timestamp_withSurroundingText_shouldFindTimecode() {
    assert_eq!(parse_timestamp("at 00:00:10,250 sharp"), 10.25);
}

/// Test the lenient zero fallback
#[test]
fn test_parse_timestamp_withUnparsableInput_shouldReturnZero() {
    assert_eq!(parse_timestamp("garbage"), 0.0);
    assert_eq!(parse_timestamp("1:2"), 0.0);
}

/// Test the strict parser reports what the lenient one hides
#[test]
fn test_parse_timestamp_strict_withUnparsableInput_shouldError() {
    assert!(matches!(parse_timestamp_strict("1:2"), Err(TimecodeError::Unparsable(_))));
    assert_eq!(parse_timestamp_strict("00:00:01,000"), Ok(1.0));
}

/// Test millisecond rounding
#[test]
fn test_round_millis_shouldKeepThreeDecimals() {
    assert_eq!(round_millis(1.23449), 1.234);
    assert_eq!(round_millis(1.2346), 1.235);
}

/// Test that inverted ranges are kept as given
#[test]
fn test_time_range_withInvertedBounds_shouldPassThrough() {
    let range = TimeRange::new(2.0, 1.0);
    assert_eq!(range.start(), 2.0);
    assert_eq!(range.end(), 1.0);
}

/// Test a range line with positioning tokens after the end time
#[test]
fn test_parse_range_line_withTrailingTokens_shouldReadLeadingToken() {
    let parsed = parse_range_line("00:00:05,000 --> 00:00:07,500 align:start position:10%");
    assert_eq!(parsed.outcome, TimestampOutcome::Parsed);
    assert_eq!(parsed.range, TimeRange::new(5.0, 7.5));
}

/// Test that a range line with an empty end side is defaulted
#[test]
fn test_parse_range_line_withMissingEnd_shouldDefault() {
    let parsed = parse_range_line("00:00:05,000 -->");
    assert_eq!(parsed.outcome, TimestampOutcome::Defaulted);
    assert_eq!(parsed.range.start(), 5.0);
    assert_eq!(parsed.range.end(), 0.0);
}
