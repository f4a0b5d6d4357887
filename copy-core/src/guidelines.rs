//! Brand guideline store.
//!
//! Guidelines are read-only once built. Vocabulary matching against them is
//! always case-insensitive.

use crate::error::ValidationError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Brand voice, vocabulary preferences and audience.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandGuidelines {
    pub brand_name: String,
    /// Tone labels in priority order
    #[serde(default)]
    pub tone_of_voice: Vec<String>,
    /// Canonical phrases; the first one leads free-text copy
    #[serde(default)]
    pub key_messaging: Vec<String>,
    #[serde(default)]
    pub avoid_words: Vec<String>,
    #[serde(default)]
    pub preferred_words: Vec<String>,
    /// Advisory only, never enforced
    #[serde(default)]
    pub style_rules: IndexMap<String, String>,
    #[serde(default)]
    pub target_audience: String,
}

impl BrandGuidelines {
    /// Start building guidelines for a brand.
    pub fn builder(brand_name: impl Into<String>) -> BrandGuidelinesBuilder {
        BrandGuidelinesBuilder {
            inner: BrandGuidelines {
                brand_name: brand_name.into(),
                tone_of_voice: Vec::new(),
                key_messaging: Vec::new(),
                avoid_words: Vec::new(),
                preferred_words: Vec::new(),
                style_rules: IndexMap::new(),
                target_audience: String::new(),
            },
        }
    }

    /// Validate the guidelines.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.brand_name.trim().is_empty() {
            return Err(ValidationError::new("brand_name", "Brand name cannot be empty")
                .with_suggestion("Set brand_name to the name used in call-to-action copy"));
        }

        if let Some(word) = self.avoid_words.iter().find(|w| w.trim().is_empty()) {
            return Err(ValidationError::new(
                "avoid_words",
                format!("Avoid-word list contains a blank entry ({:?})", word),
            )
            .with_suggestion("Remove empty entries; a blank word matches every text"));
        }

        if self.preferred_words.iter().any(|w| w.trim().is_empty()) {
            return Err(ValidationError::new(
                "preferred_words",
                "Preferred-word list contains a blank entry",
            )
            .with_suggestion("Remove empty entries; a blank word matches every text"));
        }

        Ok(())
    }

    /// Whether any tone label contains `needle` (case-insensitive).
    pub fn has_tone(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.tone_of_voice.iter().any(|t| t.to_lowercase().contains(&needle))
    }
}

/// Builder for [`BrandGuidelines`].
#[derive(Debug, Clone)]
pub struct BrandGuidelinesBuilder {
    inner: BrandGuidelines,
}

impl BrandGuidelinesBuilder {
    pub fn tone(mut self, tone: impl Into<String>) -> Self {
        self.inner.tone_of_voice.push(tone.into());
        self
    }

    pub fn tones<I, S>(mut self, tones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.tone_of_voice.extend(tones.into_iter().map(Into::into));
        self
    }

    pub fn key_message(mut self, message: impl Into<String>) -> Self {
        self.inner.key_messaging.push(message.into());
        self
    }

    pub fn avoid_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.avoid_words.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn preferred_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.preferred_words.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn style_rule(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.inner.style_rules.insert(name.into(), description.into());
        self
    }

    pub fn target_audience(mut self, audience: impl Into<String>) -> Self {
        self.inner.target_audience = audience.into();
        self
    }

    /// Build and validate.
    pub fn build(self) -> Result<BrandGuidelines, ValidationError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    /// Build without validation.
    pub fn build_unchecked(self) -> BrandGuidelines {
        self.inner
    }
}
