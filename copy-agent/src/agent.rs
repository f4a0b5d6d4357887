//! The copywriting agent.
//!
//! [`CopyAgent`] ties the pipeline together: classify the request input,
//! format it, score it against the brand and record the result. Rule-based
//! generation is synchronous; [`CopyAgent::draft_copy`] goes through the
//! injected [`TextGenerator`] instead.

use crate::classify::{ClassifiedInput, classify_input};
use crate::export::export_history;
use crate::format::ContentFormatter;
use crate::history::{CopyHistory, PerformanceMetrics};
use crate::patterns::{PatternMemory, ReferencePatterns};
use crate::prompt::build_prompt;
use chrono::{DateTime, Utc};
use copy_compliance::{ComplianceReport, ComplianceScorer, content_word_count, normalize_length};
use copy_core::{
    BrandGuidelines, CopyContent, CopyError, CopyRequest, GeneratedCopy, PlaceholderGenerator,
    Result, TextGenerator,
};
use indexmap::IndexMap;
use serde_json::{Map, Value, json};
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Timestamp layout of request ids.
const REQUEST_ID_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Hands out `copy_<YYYYMMDD_HHMMSS>` ids, suffixing `_2`, `_3`, ... within
/// the same second.
#[derive(Debug, Default)]
struct RequestIds {
    last_base: String,
    repeats: u32,
}

impl RequestIds {
    fn next(&mut self, now: DateTime<Utc>) -> String {
        let base = format!("copy_{}", now.format(REQUEST_ID_FORMAT));
        if base == self.last_base {
            self.repeats += 1;
            format!("{}_{}", base, self.repeats)
        } else {
            self.last_base = base.clone();
            self.repeats = 1;
            base
        }
    }
}

/// Brand-bound copy generator with history and reference-pattern memory.
///
/// All methods take `&self`; the agent can be shared behind an `Arc`.
pub struct CopyAgent {
    guidelines: BrandGuidelines,
    scorer: ComplianceScorer,
    generator: Arc<dyn TextGenerator>,
    history: RwLock<CopyHistory>,
    patterns: RwLock<PatternMemory>,
    ids: Mutex<RequestIds>,
}

impl std::fmt::Debug for CopyAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CopyAgent")
            .field("brand", &self.guidelines.brand_name)
            .field("generator", &self.generator.name())
            .finish_non_exhaustive()
    }
}

impl CopyAgent {
    /// Create an agent for validated guidelines, drafting through the
    /// [`PlaceholderGenerator`].
    pub fn new(guidelines: BrandGuidelines) -> Result<Self> {
        guidelines.validate()?;
        Ok(Self {
            scorer: ComplianceScorer::new(&guidelines),
            guidelines,
            generator: Arc::new(PlaceholderGenerator::new()),
            history: RwLock::new(CopyHistory::new()),
            patterns: RwLock::new(PatternMemory::new()),
            ids: Mutex::new(RequestIds::default()),
        })
    }

    /// Replace the generator used by [`CopyAgent::draft_copy`].
    pub fn with_generator(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.generator = generator;
        self
    }

    pub fn guidelines(&self) -> &BrandGuidelines {
        &self.guidelines
    }

    pub fn generator_name(&self) -> &str {
        self.generator.name()
    }

    /// Generate rule-based copy for a request and record it.
    pub fn generate_copy(&self, request: &CopyRequest) -> Result<GeneratedCopy> {
        request.validate()?;

        let classified = classify_input(&request.input_data);
        self.learn_references(request);

        let content =
            ContentFormatter::new(&self.guidelines).format(&classified, &request.target_format);
        let score = self.scorer.score(&content.as_plain_text());
        let word_count = content_word_count(&content);

        Ok(self.record(request, &classified, content, word_count, score, None))
    }

    /// Draft free-text copy through the configured [`TextGenerator`].
    ///
    /// The draft is length-normalized, scored and recorded like rule-based
    /// copy. Generator failures surface as [`CopyError::Provider`].
    pub async fn draft_copy(&self, request: &CopyRequest) -> Result<GeneratedCopy> {
        request.validate()?;

        let classified = classify_input(&request.input_data);
        self.learn_references(request);

        let prompt = build_prompt(
            &self.guidelines,
            &request.content_type,
            &classified,
            &request.target_format,
            request.context.as_deref(),
        );
        tracing::debug!(
            generator = self.generator.name(),
            prompt_len = prompt.len(),
            "drafting copy"
        );

        let raw = self.generator.generate(&prompt, &request.target_format).await.map_err(|e| {
            match e {
                CopyError::Provider { .. } => e,
                other => CopyError::provider(self.generator.name(), other.to_string()),
            }
        })?;

        let text = normalize_length(&raw, &request.target_format, &self.guidelines.brand_name);
        let content = CopyContent::Text(text);
        let score = self.scorer.score(&content.as_plain_text());
        let word_count = content_word_count(&content);
        let generator = self.generator.name().to_string();

        Ok(self.record(request, &classified, content, word_count, score, Some(generator)))
    }

    /// Explain how a piece of text scores against this agent's brand.
    pub fn explain_score(&self, text: &str) -> ComplianceReport {
        self.scorer.report(text)
    }

    fn learn_references(&self, request: &CopyRequest) {
        if let Some(copies) = request.reference_copies.as_deref().filter(|c| !c.is_empty()) {
            self.patterns.write().unwrap_or_else(PoisonError::into_inner).learn(copies);
        }
    }

    fn next_request_id(&self, now: DateTime<Utc>) -> String {
        self.ids.lock().unwrap_or_else(PoisonError::into_inner).next(now)
    }

    fn record(
        &self,
        request: &CopyRequest,
        classified: &ClassifiedInput,
        content: CopyContent,
        word_count: usize,
        score: f64,
        generator: Option<String>,
    ) -> GeneratedCopy {
        let mut metadata = Map::new();
        metadata.insert("request_type".into(), json!(request.content_type));
        metadata.insert("format".into(), json!(request.target_format.format_type.as_str()));
        metadata.insert("compliance_score".into(), json!(score));
        metadata.insert("brand".into(), json!(self.guidelines.brand_name));
        metadata.insert("image_count".into(), json!(classified.image_descriptions.len()));
        if let Some(context) = &request.context {
            metadata.insert("context".into(), Value::String(context.clone()));
        }
        if let Some(generator) = generator {
            metadata.insert("generator".into(), Value::String(generator));
        }

        let now = Utc::now();
        let request_id = self.next_request_id(now);
        let copy = GeneratedCopy::new(content, metadata, word_count, score, now, request_id);

        tracing::info!(
            request_id = %copy.request_id,
            content_type = %request.content_type,
            compliance_score = copy.compliance_score,
            word_count = copy.word_count,
            "generated copy"
        );

        self.history.write().unwrap_or_else(PoisonError::into_inner).record(copy.clone());
        copy
    }

    /// Aggregate metrics over everything generated so far.
    pub fn performance_metrics(&self) -> PerformanceMetrics {
        self.history.read().unwrap_or_else(PoisonError::into_inner).metrics()
    }

    /// A snapshot of the history.
    pub fn history(&self) -> CopyHistory {
        self.history.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Up to `n` results, newest first.
    pub fn recent(&self, n: usize) -> Vec<GeneratedCopy> {
        let history = self.history.read().unwrap_or_else(PoisonError::into_inner);
        history.recent(n).into_iter().cloned().collect()
    }

    pub fn content_type_counts(&self) -> IndexMap<String, usize> {
        self.history.read().unwrap_or_else(PoisonError::into_inner).content_type_counts()
    }

    pub fn clear_history(&self) {
        self.history.write().unwrap_or_else(PoisonError::into_inner).clear();
        tracing::info!("cleared copy history");
    }

    /// Write the history as pretty JSON.
    pub fn export_history<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let history = self.history.read().unwrap_or_else(PoisonError::into_inner);
        export_history(&history, path)
    }

    /// Patterns from the most recent request that carried reference copies.
    pub fn patterns(&self) -> Option<ReferencePatterns> {
        self.patterns.read().unwrap_or_else(PoisonError::into_inner).patterns().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_request_ids_suffix_within_same_second() {
        let mut ids = RequestIds::default();
        let t = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();

        assert_eq!(ids.next(t), "copy_20240309_140507");
        assert_eq!(ids.next(t), "copy_20240309_140507_2");
        assert_eq!(ids.next(t), "copy_20240309_140507_3");

        let later = t + chrono::Duration::seconds(1);
        assert_eq!(ids.next(later), "copy_20240309_140508");
    }

    #[test]
    fn test_agent_rejects_invalid_guidelines() {
        let guidelines = BrandGuidelines::builder("").build_unchecked();
        assert!(matches!(CopyAgent::new(guidelines), Err(CopyError::Validation(_))));
    }
}
