/*!
 * Diff marker parsing for edit-annotated transcripts.
 *
 * An edited span is written `【before】/【after】`. The annotated text is
 * split into unchanged text and diff segments, and the fully original and
 * fully edited strings are rebuilt by substitution over the input.
 */

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Serialize;

/// `【before】/【after】` with optional whitespace around the slash
static DIFF_MARKER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"【([^】]+)】\s*/\s*【([^】]+)】").expect("Invalid diff marker regex")
});

/// One span of an edit-annotated transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DiffSegment {
    /// Text unchanged by the edit
    Text {
        #[serde(rename = "text")]
        content: String,
    },
    /// An edited span
    Diff { before: String, after: String },
}

impl DiffSegment {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text { content: content.into() }
    }

    pub fn diff(before: impl Into<String>, after: impl Into<String>) -> Self {
        Self::Diff {
            before: before.into(),
            after: after.into(),
        }
    }

    pub fn is_diff(&self) -> bool {
        matches!(self, Self::Diff { .. })
    }
}

/// A parsed edit transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditDocument {
    /// Ordered text and diff spans
    pub segments: Vec<DiffSegment>,
    /// Input with every marker replaced by its `before` text
    pub original: String,
    /// Input with every marker replaced by its `after` text
    pub edited: String,
}

impl EditDocument {
    /// Number of edited spans
    pub fn diff_count(&self) -> usize {
        self.segments.iter().filter(|segment| segment.is_diff()).count()
    }

    /// Concatenate the segments using each diff's `before` text
    pub fn rebuild_original(&self) -> String {
        self.rebuild(|before, _| before)
    }

    /// Concatenate the segments using each diff's `after` text
    pub fn rebuild_edited(&self) -> String {
        self.rebuild(|_, after| after)
    }

    fn rebuild<'a>(&'a self, pick: impl Fn(&'a str, &'a str) -> &'a str) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                DiffSegment::Text { content } => content.as_str(),
                DiffSegment::Diff { before, after } => pick(before, after),
            })
            .collect()
    }
}

/// Split annotated text into text and diff segments.
///
/// Unterminated or nested brackets do not match and stay plain text.
pub fn parse_edit_markers(text: &str) -> EditDocument {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for caps in DIFF_MARKER_REGEX.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        push_text(&mut segments, &text[cursor..whole.start()]);
        segments.push(DiffSegment::diff(caps[1].trim(), caps[2].trim()));
        cursor = whole.end();
    }
    push_text(&mut segments, &text[cursor..]);

    EditDocument {
        segments,
        original: replace_markers(text, 1).into_owned(),
        edited: replace_markers(text, 2).into_owned(),
    }
}

fn push_text(segments: &mut Vec<DiffSegment>, span: &str) {
    if !span.is_empty() {
        segments.push(DiffSegment::text(span));
    }
}

fn replace_markers(text: &str, group: usize) -> Cow<'_, str> {
    DIFF_MARKER_REGEX.replace_all(text, |caps: &Captures| caps[group].trim().to_string())
}
