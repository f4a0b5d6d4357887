//! Generation history and aggregate metrics.

use chrono::{DateTime, Duration, Utc};
use copy_core::GeneratedCopy;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

/// Entries newer than this count as recent.
pub const RECENT_WINDOW_DAYS: i64 = 7;

/// Message reported when nothing has been generated.
pub const EMPTY_HISTORY_MESSAGE: &str = "No copies generated yet";

/// Label for entries without a `request_type` echo.
pub const UNKNOWN_CONTENT_TYPE: &str = "Unknown";

/// Aggregate snapshot over the history.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PerformanceMetrics {
    Empty {
        message: String,
    },
    Summary {
        total_copies_generated: usize,
        average_compliance_score: f64,
        average_word_count: f64,
        recent_copies: usize,
    },
}

impl PerformanceMetrics {
    pub fn is_empty(&self) -> bool {
        matches!(self, PerformanceMetrics::Empty { .. })
    }

    /// Format as a human-readable string
    pub fn format_summary(&self) -> String {
        match self {
            PerformanceMetrics::Empty { message } => format!("{}\n", message),
            PerformanceMetrics::Summary {
                total_copies_generated,
                average_compliance_score,
                average_word_count,
                recent_copies,
            } => {
                let mut output = String::new();
                output.push_str(&format!("Total Copies: {}\n", total_copies_generated));
                output.push_str(&format!(
                    "Avg. Compliance: {:.1}%\n",
                    average_compliance_score * 100.0
                ));
                output.push_str(&format!("Avg. Words: {:.0}\n", average_word_count));
                output.push_str(&format!("Recent Copies: {}\n", recent_copies));
                output
            }
        }
    }
}

/// One exported history entry.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryRecord {
    pub timestamp: String,
    pub content: String,
    pub word_count: usize,
    pub compliance_score: f64,
    pub metadata: Map<String, Value>,
}

impl From<&GeneratedCopy> for HistoryRecord {
    fn from(copy: &GeneratedCopy) -> Self {
        Self {
            timestamp: copy.timestamp.to_rfc3339(),
            content: copy.content.as_plain_text(),
            word_count: copy.word_count,
            compliance_score: copy.compliance_score,
            metadata: copy.metadata.clone(),
        }
    }
}

/// Append-only log of generated copy.
#[derive(Debug, Clone, Default)]
pub struct CopyHistory {
    entries: Vec<GeneratedCopy>,
}

impl CopyHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, copy: GeneratedCopy) {
        self.entries.push(copy);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[GeneratedCopy] {
        &self.entries
    }

    pub fn last(&self) -> Option<&GeneratedCopy> {
        self.entries.last()
    }

    /// Up to `n` entries, newest first.
    pub fn recent(&self, n: usize) -> Vec<&GeneratedCopy> {
        self.entries.iter().rev().take(n).collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Metrics relative to the current time.
    pub fn metrics(&self) -> PerformanceMetrics {
        self.metrics_at(Utc::now())
    }

    /// Metrics relative to `now`.
    pub fn metrics_at(&self, now: DateTime<Utc>) -> PerformanceMetrics {
        if self.entries.is_empty() {
            return PerformanceMetrics::Empty {
                message: EMPTY_HISTORY_MESSAGE.to_string(),
            };
        }

        let total = self.entries.len();
        let compliance: f64 = self.entries.iter().map(|c| c.compliance_score).sum();
        let words: usize = self.entries.iter().map(|c| c.word_count).sum();
        let window = Duration::days(RECENT_WINDOW_DAYS);
        let recent = self.entries.iter().filter(|c| now - c.timestamp < window).count();

        PerformanceMetrics::Summary {
            total_copies_generated: total,
            average_compliance_score: compliance / total as f64,
            average_word_count: words as f64 / total as f64,
            recent_copies: recent,
        }
    }

    /// Entry count per `request_type`, in order of first appearance.
    pub fn content_type_counts(&self) -> IndexMap<String, usize> {
        let mut counts = IndexMap::new();
        for copy in &self.entries {
            let key = copy.request_type().unwrap_or(UNKNOWN_CONTENT_TYPE).to_string();
            *counts.entry(key).or_insert(0) += 1;
        }
        counts
    }

    pub fn records(&self) -> Vec<HistoryRecord> {
        self.entries.iter().map(HistoryRecord::from).collect()
    }

    /// Export to pretty JSON
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.records())
    }
}
