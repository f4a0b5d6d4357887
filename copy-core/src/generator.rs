//! Text generation seam.
//!
//! Real providers (hosted language models) implement [`TextGenerator`]; the
//! scoring and formatting pipeline never depends on which one is plugged in.

use crate::constraints::CopyConstraints;
use crate::error::Result;
use async_trait::async_trait;

/// Text returned by [`PlaceholderGenerator`].
pub const PLACEHOLDER_COPY: &str =
    "Discover a smarter way to reach your goals with a solution built around you.";

#[async_trait]
pub trait TextGenerator: Send + Sync {
    fn name(&self) -> &str;
    async fn generate(&self, prompt: &str, constraints: &CopyConstraints) -> Result<String>;
}

/// Deterministic generator that ignores its prompt.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderGenerator;

impl PlaceholderGenerator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TextGenerator for PlaceholderGenerator {
    fn name(&self) -> &str {
        "placeholder"
    }

    async fn generate(&self, _prompt: &str, _constraints: &CopyConstraints) -> Result<String> {
        Ok(PLACEHOLDER_COPY.to_string())
    }
}
