/*!
 * Word list normalization.
 *
 * Raw word records come from loosely formatted recognizer dumps. Records
 * missing text or numeric timing are dropped silently; an unreadable score
 * drops only the score.
 */

use log::{debug, warn};
use serde_json::Value;

use super::diagnostics::Diagnostics;
use super::literal::parse_literal;
use super::model::Word;
use super::timing::round_millis;
use crate::errors::TranscriptError;

/// Keys holding the token text, in lookup order
const TEXT_KEYS: [&str; 2] = ["word", "text"];

/// Keys holding the confidence score, in lookup order
const SCORE_KEYS: [&str; 2] = ["score", "confidence"];

/// Decoded contents of a word data file
#[derive(Debug, Clone, Default)]
pub struct TranscriptData {
    /// Raw word records, not yet validated
    pub words: Vec<Value>,
    /// Language code declared by the file
    pub lang: Option<String>,
    /// Declared end of the recording in seconds
    pub end: Option<f64>,
}

impl TranscriptData {
    fn from_value(value: Value) -> Self {
        match value {
            Value::Array(words) => Self {
                words,
                ..Self::default()
            },
            Value::Object(mut map) => {
                let words = match map.remove("words") {
                    Some(Value::Array(words)) => words,
                    _ => Vec::new(),
                };
                let lang = map
                    .get("lang")
                    .or_else(|| map.get("language"))
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .filter(|lang| !lang.trim().is_empty());
                let end = map.get("end").and_then(as_finite_f64);
                Self { words, lang, end }
            }
            _ => Self::default(),
        }
    }
}

/// Decode a word data file, trying strict JSON before the permissive
/// literal syntax. Empty input yields empty data.
pub fn load_word_data(raw: &str) -> Result<TranscriptData, TranscriptError> {
    let raw = raw.trim_start_matches('\u{feff}').trim();
    if raw.is_empty() {
        return Ok(TranscriptData::default());
    }

    let value = match serde_json::from_str::<Value>(raw) {
        Ok(value) => value,
        Err(json_err) => {
            debug!("Word data is not strict JSON ({}), trying literal syntax", json_err);
            parse_literal(raw).map_err(|literal_err| {
                TranscriptError::Decode(format!("not JSON ({}); {}", json_err, literal_err))
            })?
        }
    };

    Ok(TranscriptData::from_value(value))
}

/// Validate raw word records into words, preserving input order
pub fn normalize_words(records: &[Value]) -> Vec<Word> {
    let mut diagnostics = Diagnostics::new();
    normalize_words_with_diagnostics(records, &mut diagnostics)
}

/// Validate raw word records, counting dropped records and scores
pub fn normalize_words_with_diagnostics(records: &[Value], diagnostics: &mut Diagnostics) -> Vec<Word> {
    let mut words = Vec::with_capacity(records.len());
    let mut dropped = 0;

    for (idx, record) in records.iter().enumerate() {
        let Some(word) = normalize_word(record, diagnostics) else {
            debug!("Dropping word record {}: {}", idx, record);
            dropped += 1;
            continue;
        };
        words.push(word);
    }

    if dropped > 0 {
        warn!("Dropped {} of {} word records", dropped, records.len());
    }
    diagnostics.words_dropped += dropped;

    words
}

fn normalize_word(record: &Value, diagnostics: &mut Diagnostics) -> Option<Word> {
    let text = TEXT_KEYS
        .iter()
        .find_map(|key| record.get(key))
        .and_then(text_value)?;

    let start = record.get("start").and_then(as_finite_f64)?;
    let end = record.get("end").and_then(as_finite_f64)?;

    let mut word = Word::new(text, start, end);

    if let Some(score) = SCORE_KEYS.iter().find_map(|key| record.get(key)) {
        match as_finite_f64(score) {
            Some(score) => word = word.with_confidence(round_millis(score)),
            None if score.is_null() => {}
            None => diagnostics.scores_discarded += 1,
        }
    }

    Some(word)
}

/// Token text: strings are trimmed, numbers stringified, empty rejected
fn text_value(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

/// Numbers and numeric strings that convert to a finite float
fn as_finite_f64(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}
