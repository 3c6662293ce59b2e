/*!
 * Subtitle cue parsing into transcript segments.
 *
 * Cues are blank-line separated blocks of an optional index line, a
 * `start --> end` range line and one or more text lines. Malformed blocks
 * are skipped or given a degenerate range rather than failing the file.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use super::diagnostics::Diagnostics;
use super::model::Segment;
use super::timing::{RANGE_MARKER, TimestampOutcome, parse_range_line};

/// One or more whitespace-only lines between cues
static BLOCK_SEPARATOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\r?\n(?:[^\S\r\n]*\r?\n)+").expect("Invalid block separator regex")
});

/// Whitespace left in front of closing punctuation after joining lines
static TRAILING_PUNCT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+([,.;!?])").expect("Invalid trailing punctuation regex")
});

/// Speaker separators in priority order: full-width, ASCII, small and
/// vertical presentation forms of the colon
const SPEAKER_SEPARATORS: [char; 4] = ['：', ':', '﹕', '︓'];

const BOM: char = '\u{feff}';

/// Parse subtitle text into segments with empty word lists
pub fn parse_segments(content: &str) -> Vec<Segment> {
    let mut diagnostics = Diagnostics::new();
    parse_segments_with_diagnostics(content, &mut diagnostics)
}

/// Parse subtitle text, counting dropped blocks and defaulted ranges
pub fn parse_segments_with_diagnostics(content: &str, diagnostics: &mut Diagnostics) -> Vec<Segment> {
    let content = content.trim_start_matches(BOM).trim();
    if content.is_empty() {
        return Vec::new();
    }

    let mut segments = Vec::new();

    for (block_idx, block) in BLOCK_SEPARATOR_REGEX.split(content).enumerate() {
        let lines: Vec<&str> = block
            .lines()
            .map(|line| line.trim_matches(BOM).trim())
            .filter(|line| !line.is_empty())
            .collect();

        if lines.len() < 2 {
            debug!("Dropping subtitle block {}: fewer than two lines", block_idx + 1);
            diagnostics.blocks_dropped += 1;
            continue;
        }

        // Blocks without an index line carry the range first
        let range_idx = if lines[0].contains(RANGE_MARKER) { 0 } else { 1 };
        let text_lines = &lines[range_idx + 1..];
        if text_lines.is_empty() {
            debug!("Dropping subtitle block {}: no text after range line", block_idx + 1);
            diagnostics.blocks_without_text += 1;
            continue;
        }

        let parsed = parse_range_line(lines[range_idx]);
        if parsed.outcome == TimestampOutcome::Defaulted {
            debug!(
                "Subtitle block {} has an unreadable range line '{}'",
                block_idx + 1,
                lines[range_idx]
            );
            diagnostics.ranges_defaulted += 1;
        }

        let raw_text = text_lines.join(" ");
        let (speaker, text) = extract_speaker_and_text(&raw_text);
        let text = TRAILING_PUNCT_REGEX.replace_all(&text, "$1");

        segments.push(Segment::new(parsed.range, text.trim(), speaker));
    }

    segments
}

/// Split a `Speaker: sentence` line into its label and sentence.
///
/// Each separator is tried in turn at its first occurrence; a split is only
/// accepted when both sides are non-empty.
pub fn extract_speaker_and_text(raw: &str) -> (Option<String>, String) {
    let text = raw.trim();

    for separator in SPEAKER_SEPARATORS {
        if let Some((label, remainder)) = text.split_once(separator) {
            let label = label.trim();
            let remainder = remainder.trim();
            if !label.is_empty() && !remainder.is_empty() {
                return (Some(label.to_string()), remainder.to_string());
            }
        }
    }

    (None, text.to_string())
}
