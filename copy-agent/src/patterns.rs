//! Reference-copy pattern memory.
//!
//! Reference copies are broken into sentence fragments and length stats.
//! Each call to [`PatternMemory::learn`] replaces what was stored before.
//! Nothing in generation reads these patterns yet.

use copy_compliance::count_words;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

static SENTENCE_END: OnceLock<Regex> = OnceLock::new();

fn sentence_end() -> &'static Regex {
    SENTENCE_END.get_or_init(|| {
        Regex::new(r"[.!?]+").expect("Invalid regex pattern")
    })
}

/// Patterns derived from one batch of reference copies.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReferencePatterns {
    /// Sentence fragments across all copies, in order
    pub sentences: Vec<String>,
    /// Word count per reference copy
    pub lengths: Vec<usize>,
}

impl ReferencePatterns {
    /// Derive patterns from reference copies.
    pub fn from_copies(copies: &[String]) -> Self {
        let mut patterns = Self::default();
        for copy in copies {
            patterns.sentences.extend(
                sentence_end()
                    .split(copy)
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string),
            );
            patterns.lengths.push(count_words(copy));
        }
        patterns
    }

    /// Mean words per reference copy.
    pub fn average_length(&self) -> Option<f64> {
        if self.lengths.is_empty() {
            None
        } else {
            Some(self.lengths.iter().sum::<usize>() as f64 / self.lengths.len() as f64)
        }
    }
}

/// Per-agent store for the latest reference patterns.
#[derive(Debug, Clone, Default)]
pub struct PatternMemory {
    patterns: Option<ReferencePatterns>,
}

impl PatternMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored patterns with ones derived from `copies`.
    pub fn learn(&mut self, copies: &[String]) -> &ReferencePatterns {
        let patterns = ReferencePatterns::from_copies(copies);
        tracing::debug!(
            copies = copies.len(),
            sentences = patterns.sentences.len(),
            "updated reference patterns"
        );
        self.patterns.insert(patterns)
    }

    pub fn patterns(&self) -> Option<&ReferencePatterns> {
        self.patterns.as_ref()
    }

    pub fn clear(&mut self) {
        self.patterns = None;
    }
}
