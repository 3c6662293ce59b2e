/*!
 * Counters for input the lenient parsers dropped or defaulted.
 *
 * Parsing behavior is identical with or without a `Diagnostics` sink; the
 * counts only make silent data loss visible to the manifest layer.
 */

use std::fmt;

/// Tally of skipped and defaulted transcript input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Diagnostics {
    /// Subtitle blocks with fewer than two non-empty lines
    pub blocks_dropped: usize,
    /// Subtitle blocks with a range line but no text
    pub blocks_without_text: usize,
    /// Cues emitted with a zero or partial range
    pub ranges_defaulted: usize,
    /// Word records missing text or numeric timing
    pub words_dropped: usize,
    /// Word records kept without their unreadable score
    pub scores_discarded: usize,
    /// Words that no segment claimed during alignment
    pub words_unassigned: usize,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when nothing was dropped or defaulted
    pub fn is_clean(&self) -> bool {
        *self == Self::default()
    }

    /// Add another tally into this one
    pub fn merge(&mut self, other: &Diagnostics) {
        self.blocks_dropped += other.blocks_dropped;
        self.blocks_without_text += other.blocks_without_text;
        self.ranges_defaulted += other.ranges_defaulted;
        self.words_dropped += other.words_dropped;
        self.scores_discarded += other.scores_discarded;
        self.words_unassigned += other.words_unassigned;
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} blocks dropped, {} blocks without text, {} ranges defaulted, {} words dropped, {} scores discarded, {} words unassigned",
            self.blocks_dropped,
            self.blocks_without_text,
            self.ranges_defaulted,
            self.words_dropped,
            self.scores_discarded,
            self.words_unassigned
        )
    }
}
