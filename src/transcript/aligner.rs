/*!
 * Word-to-segment alignment.
 *
 * Segments and words are treated as two chronologically ordered streams
 * merged in one forward sweep. A shared cursor over the words is carried
 * from segment to segment, so a word passed by one segment is never
 * revisited by a later one.
 */

use log::{debug, warn};

use super::diagnostics::Diagnostics;
use super::model::{Segment, Word};
use super::timing::TimeRange;
use crate::errors::TranscriptError;

/// Slack in seconds between cue boundaries and recognizer word timings
pub const TOLERANCE_SECS: f64 = 0.05;

/// Attach to each segment the words that fall inside its window and whose
/// text occurs in the segment text.
///
/// Both inputs must be in chronological order. Words that match no segment
/// are left out.
pub fn attach_words(mut segments: Vec<Segment>, words: &[Word]) -> Vec<Segment> {
    let mut cursor = 0;

    for idx in 0..segments.len() {
        let boundary = match segments.get(idx + 1) {
            Some(next) => next.start(),
            None => segments[idx].end(),
        };
        let segment = &mut segments[idx];
        let window_start = segment.start() - TOLERANCE_SECS;
        let window_end = segment.end() - TOLERANCE_SECS;

        let mut collected = Vec::new();
        let mut scan = cursor;
        while let Some(word) = words.get(scan) {
            if word.end() < window_start {
                scan += 1;
                continue;
            }
            if word.start() > window_end {
                break;
            }
            if word.end() <= boundary + TOLERANCE_SECS && segment.text.contains(word.text.as_str()) {
                collected.push(word.clone());
            }
            scan += 1;
        }

        cursor = scan;
        segment.words = collected;
    }

    segments
}

/// Align words to subtitle segments, or wrap all words in one synthesized
/// segment when there are no cues.
pub fn align_transcript(segments: Vec<Segment>, words: &[Word]) -> Vec<Segment> {
    if !segments.is_empty() {
        return attach_words(segments, words);
    }

    match (words.first(), words.last()) {
        (Some(first), Some(last)) => {
            let text = words
                .iter()
                .map(|word| word.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            let mut segment = Segment::new(TimeRange::new(first.start(), last.end()), text, None);
            segment.words = words.to_vec();
            vec![segment]
        }
        _ => Vec::new(),
    }
}

/// Verify that segment and word start times never decrease
pub fn check_chronological(segments: &[Segment], words: &[Word]) -> Result<(), TranscriptError> {
    for (idx, pair) in segments.windows(2).enumerate() {
        if pair[1].start() < pair[0].start() {
            return Err(TranscriptError::UnorderedSegments {
                index: idx + 1,
                start: pair[1].start(),
                previous: pair[0].start(),
            });
        }
    }

    for (idx, pair) in words.windows(2).enumerate() {
        if pair[1].start() < pair[0].start() {
            return Err(TranscriptError::UnorderedWords {
                index: idx + 1,
                start: pair[1].start(),
                previous: pair[0].start(),
            });
        }
    }

    Ok(())
}

/// Alignment entry point enforcing or reporting the ordering precondition
#[derive(Debug, Clone, Copy, Default)]
pub struct Aligner {
    strict_ordering: bool,
}

impl Aligner {
    /// Lenient aligner: unordered input is logged and aligned anyway
    pub fn new() -> Self {
        Self::default()
    }

    /// Aligner that rejects unordered input
    pub fn strict() -> Self {
        Self { strict_ordering: true }
    }

    pub fn with_strict_ordering(mut self, strict_ordering: bool) -> Self {
        self.strict_ordering = strict_ordering;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict_ordering
    }

    /// Align words to segments, counting words no segment claimed
    pub fn align(
        &self,
        segments: Vec<Segment>,
        words: &[Word],
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<Segment>, TranscriptError> {
        if let Err(e) = check_chronological(&segments, words) {
            if self.strict_ordering {
                return Err(e);
            }
            warn!("Aligning out-of-order transcript: {}", e);
        }

        let aligned = align_transcript(segments, words);

        let attached: usize = aligned.iter().map(|segment| segment.words.len()).sum();
        let unassigned = words.len().saturating_sub(attached);
        if unassigned > 0 {
            debug!("{} of {} words matched no segment", unassigned, words.len());
        }
        diagnostics.words_unassigned += unassigned;

        Ok(aligned)
    }
}
