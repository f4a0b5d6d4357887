//! # copy-compliance
//!
//! Brand compliance scoring and length normalization for generated copy.
//!
//! ## Features
//!
//! - **Compliance scoring**: vocabulary and tone heuristics bounded to [0.0, 1.0]
//! - **Length normalization**: truncation and brand filler padding by word count
//! - **Word counting**: whitespace counts for text, a compatibility formula for tables
//!
//! ## Quick Start
//!
//! ```rust
//! use copy_compliance::{normalize_length, score_compliance};
//! use copy_core::{BrandGuidelines, CopyConstraints};
//!
//! let guidelines = BrandGuidelines::builder("Acme")
//!     .avoid_words(["cheap"])
//!     .preferred_words(["premium"])
//!     .build()
//!     .unwrap();
//! let score = score_compliance("This premium product is not cheap.", &guidelines);
//! assert!((score - 0.95).abs() < 1e-9);
//!
//! let constraints = CopyConstraints::builder().min_length(0).max_length(3).build().unwrap();
//! assert_eq!(normalize_length("one two three four five", &constraints, "Acme"), "one two three");
//! ```

pub mod normalize;
pub mod scoring;
pub mod wordcount;

pub use normalize::{FILLER_PHRASES, filler_phrases, normalize_length};
pub use scoring::{
    AVOID_WORD_PENALTY, ComplianceReport, ComplianceScorer, PREFERRED_WORD_BONUS,
    PREFERRED_WORD_CAP, TONE_CAP, TONE_KEYWORD_BONUS, TONE_KEYWORDS, ToneMatch, score_compliance,
    tone_keywords,
};
pub use wordcount::{content_word_count, count_words, table_word_count};
