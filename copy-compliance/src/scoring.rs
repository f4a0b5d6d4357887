//! Brand compliance scoring
//!
//! Vocabulary and tone heuristic. All matching is case-insensitive substring
//! matching; weights are fixed.

use copy_core::BrandGuidelines;
use serde::Serialize;
use std::collections::HashSet;

/// Penalty per avoid-word found.
pub const AVOID_WORD_PENALTY: f64 = 0.1;
/// Bonus per distinct preferred word found.
pub const PREFERRED_WORD_BONUS: f64 = 0.05;
/// Cap on the total preferred-word bonus.
pub const PREFERRED_WORD_CAP: f64 = 0.2;
/// Bonus per tone keyword found.
pub const TONE_KEYWORD_BONUS: f64 = 0.02;
/// Cap on the bonus from any single tone label.
pub const TONE_CAP: f64 = 0.1;

/// Tones the scorer recognizes and the keywords that signal them.
pub const TONE_KEYWORDS: &[(&str, &[&str])] = &[
    ("professional", &["solution", "expertise", "quality", "reliable"]),
    ("friendly", &["help", "support", "easy", "simple", "welcome"]),
    ("conversational", &["you", "your", "we", "let's", "together"]),
];

/// Keywords for a tone label, if the label is recognized.
pub fn tone_keywords(tone: &str) -> Option<&'static [&'static str]> {
    let tone = tone.trim().to_lowercase();
    TONE_KEYWORDS.iter().find(|(name, _)| *name == tone).map(|(_, words)| *words)
}

/// Per-tone contribution to a compliance score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToneMatch {
    pub tone: String,
    pub keywords: Vec<String>,
    pub bonus: f64,
}

/// Explainable breakdown of a compliance score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplianceReport {
    pub avoid_hits: Vec<String>,
    pub preferred_hits: Vec<String>,
    pub tone_matches: Vec<ToneMatch>,
    /// Final score, clamped to [0.0, 1.0]
    pub score: f64,
}

impl ComplianceReport {
    pub fn penalty(&self) -> f64 {
        self.avoid_hits.len() as f64 * AVOID_WORD_PENALTY
    }

    pub fn preferred_bonus(&self) -> f64 {
        (self.preferred_hits.len() as f64 * PREFERRED_WORD_BONUS).min(PREFERRED_WORD_CAP)
    }

    pub fn tone_bonus(&self) -> f64 {
        self.tone_matches.iter().map(|t| t.bonus).sum()
    }
}

/// Scores text against a brand's vocabulary and tone of voice.
#[derive(Debug, Clone)]
pub struct ComplianceScorer {
    avoid_words: Vec<String>,
    preferred_words: Vec<String>,
    tones: Vec<String>,
}

impl ComplianceScorer {
    /// Create a scorer for the given guidelines.
    pub fn new(guidelines: &BrandGuidelines) -> Self {
        let mut seen = HashSet::new();
        let preferred_words = guidelines
            .preferred_words
            .iter()
            .map(|w| w.to_lowercase())
            .filter(|w| seen.insert(w.clone()))
            .collect();

        Self {
            avoid_words: guidelines.avoid_words.iter().map(|w| w.to_lowercase()).collect(),
            preferred_words,
            tones: guidelines.tone_of_voice.iter().map(|t| t.trim().to_lowercase()).collect(),
        }
    }

    /// Score text. Returns a value in [0.0, 1.0].
    pub fn score(&self, text: &str) -> f64 {
        self.report(text).score
    }

    /// Score text and explain the result.
    pub fn report(&self, text: &str) -> ComplianceReport {
        let text = text.to_lowercase();

        let avoid_hits: Vec<String> =
            self.avoid_words.iter().filter(|w| text.contains(w.as_str())).cloned().collect();

        let preferred_hits: Vec<String> =
            self.preferred_words.iter().filter(|w| text.contains(w.as_str())).cloned().collect();

        let mut tone_matches = Vec::new();
        for tone in &self.tones {
            let Some(keywords) = tone_keywords(tone) else {
                continue;
            };
            let found: Vec<String> =
                keywords.iter().filter(|k| text.contains(**k)).map(|k| k.to_string()).collect();
            let bonus = (found.len() as f64 * TONE_KEYWORD_BONUS).min(TONE_CAP);
            tone_matches.push(ToneMatch {
                tone: tone.clone(),
                keywords: found,
                bonus,
            });
        }

        let mut report = ComplianceReport {
            avoid_hits,
            preferred_hits,
            tone_matches,
            score: 0.0,
        };
        let raw = 1.0 - report.penalty() + report.preferred_bonus() + report.tone_bonus();
        report.score = raw.clamp(0.0, 1.0);

        if !report.avoid_hits.is_empty() {
            tracing::warn!(
                avoid_words = ?report.avoid_hits,
                "copy contains words the brand avoids"
            );
        }

        report
    }
}

/// Score `text` against `guidelines` in one call.
pub fn score_compliance(text: &str, guidelines: &BrandGuidelines) -> f64 {
    ComplianceScorer::new(guidelines).score(text)
}
