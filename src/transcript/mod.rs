/*!
 * Timed transcript preparation.
 *
 * Turns subtitle cues and raw recognizer word lists into sentence segments
 * carrying per-word timing:
 * - `timing`: time code parsing and `TimeRange`
 * - `subtitles`: cue blocks to segments, with speaker labels
 * - `words`: raw word records to validated words
 * - `literal`: permissive literal-object decoding for word files
 * - `aligner`: word-to-segment attachment
 * - `diagnostics`: counts of dropped and defaulted input
 */

pub mod aligner;
pub mod diagnostics;
pub mod literal;
pub mod model;
pub mod subtitles;
pub mod timing;
pub mod words;

pub use aligner::{Aligner, TOLERANCE_SECS, align_transcript, attach_words, check_chronological};
pub use diagnostics::Diagnostics;
pub use model::{Segment, Word};
pub use subtitles::{extract_speaker_and_text, parse_segments, parse_segments_with_diagnostics};
pub use timing::{TimeRange, parse_range_line, parse_timestamp, parse_timestamp_strict};
pub use words::{TranscriptData, load_word_data, normalize_words, normalize_words_with_diagnostics};
