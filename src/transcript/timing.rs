/*!
 * Time code parsing for subtitle range lines.
 *
 * Two entry points are offered: a lenient parser that falls back to zero
 * seconds when no time code is found, and a strict one that reports the
 * failure. Range lines additionally report whether their bounds were parsed
 * or defaulted, so callers can count degenerate cues without rejecting them.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::errors::TimecodeError;

/// `HH:MM:SS,mmm` time code, searched anywhere in the input
static TIMECODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+):(\d+):(\d+),(\d+)").expect("Invalid time code regex")
});

/// Range separator used by subtitle cues
pub const RANGE_MARKER: &str = "-->";

/// Round a value in seconds to millisecond precision
pub fn round_millis(seconds: f64) -> f64 {
    (seconds * 1000.0).round() / 1000.0
}

/// A span of time in seconds
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TimeRange {
    start: f64,
    end: f64,
}

impl TimeRange {
    /// Create a range, rounding both bounds to milliseconds.
    ///
    /// Bounds are kept as given; `start > end` is not corrected.
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start: round_millis(start),
            end: round_millis(end),
        }
    }

    /// Start of the range in seconds
    pub fn start(&self) -> f64 {
        self.start
    }

    /// End of the range in seconds
    pub fn end(&self) -> f64 {
        self.end
    }
}

/// Whether a value came from the input or from the lenient fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampOutcome {
    /// Both bounds were read from the input
    Parsed,
    /// At least one bound fell back to zero
    Defaulted,
}

/// Result of reading a `start --> end` line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeParse {
    /// The range, possibly degenerate
    pub range: TimeRange,
    /// How the range was obtained
    pub outcome: TimestampOutcome,
}

/// Parse a time code strictly, reporting inputs without one.
pub fn parse_timestamp_strict(value: &str) -> Result<f64, TimecodeError> {
    let caps = TIMECODE_REGEX
        .captures(value.trim())
        .ok_or_else(|| TimecodeError::Unparsable(value.to_string()))?;

    let mut parts = [0u64; 4];
    for (slot, idx) in parts.iter_mut().zip(1..=4usize) {
        *slot = caps[idx]
            .parse()
            .map_err(|_| TimecodeError::OutOfRange(value.to_string()))?;
    }
    let [hours, minutes, seconds, millis] = parts;

    let total = hours as f64 * 3600.0 + minutes as f64 * 60.0 + seconds as f64 + millis as f64 / 1000.0;
    Ok(round_millis(total))
}

/// Parse a time code, returning `0.0` when none can be read.
pub fn parse_timestamp(value: &str) -> f64 {
    parse_timestamp_strict(value).unwrap_or(0.0)
}

/// Parse a cue range line such as `00:00:01,000 --> 00:00:02,500 X1:40`.
///
/// Only the first token after the marker is read for the end time, so
/// trailing positioning or style tokens are ignored.
pub fn parse_range_line(line: &str) -> RangeParse {
    let Some((start_part, end_part)) = line.split_once(RANGE_MARKER) else {
        return RangeParse {
            range: TimeRange::default(),
            outcome: TimestampOutcome::Defaulted,
        };
    };

    let start = parse_timestamp_strict(start_part.trim());
    let end = end_part
        .split_whitespace()
        .next()
        .ok_or_else(|| TimecodeError::Unparsable(end_part.to_string()))
        .and_then(parse_timestamp_strict);

    let outcome = if start.is_ok() && end.is_ok() {
        TimestampOutcome::Parsed
    } else {
        TimestampOutcome::Defaulted
    };

    RangeParse {
        range: TimeRange::new(start.unwrap_or(0.0), end.unwrap_or(0.0)),
        outcome,
    }
}
