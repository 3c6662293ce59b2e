/*!
 * Transcript data model shared by the subtitle parser, the word normalizer
 * and the aligner.
 *
 * The types serialize flat (`start`/`end` next to `text`) because that is
 * the shape the gallery front end reads.
 */

use serde::Serialize;

use super::timing::TimeRange;

/// A single timestamped token with an optional confidence score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Word {
    /// Token text, never empty
    pub text: String,

    /// Time span of the token
    #[serde(flatten)]
    pub range: TimeRange,

    /// Recognizer confidence rounded to three decimals
    #[serde(rename = "score", skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl Word {
    /// Create a word without a confidence score
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            range: TimeRange::new(start, end),
            confidence: None,
        }
    }

    /// Attach a confidence score
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    pub fn start(&self) -> f64 {
        self.range.start()
    }

    pub fn end(&self) -> f64 {
        self.range.end()
    }
}

/// A time-bounded unit of transcript text: one subtitle cue, or a
/// synthesized segment covering a whole transcript.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    #[serde(flatten)]
    pub range: TimeRange,

    /// Sentence text with any speaker label removed
    pub text: String,

    /// Speaker label, if the cue carried one
    pub speaker: Option<String>,

    /// Words attributed to this segment, in transcript order
    pub words: Vec<Word>,
}

impl Segment {
    /// Create a segment with no attached words
    pub fn new(range: TimeRange, text: impl Into<String>, speaker: Option<String>) -> Self {
        Self {
            range,
            text: text.into(),
            speaker,
            words: Vec::new(),
        }
    }

    pub fn start(&self) -> f64 {
        self.range.start()
    }

    pub fn end(&self) -> f64 {
        self.range.end()
    }
}
