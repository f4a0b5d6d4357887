//! # copy-agent
//!
//! Multi-modal copywriting agent built on [`copy_core`] and [`copy_compliance`].
//!
//! ## Overview
//!
//! - [`CopyAgent`] - Classifies input, formats copy, scores it and keeps history
//! - [`classify_input`] - Splits request input into text, structured items and images
//! - [`ContentFormatter`] - Table and text rendering with brand phrasing
//! - [`PatternMemory`] - Sentence and length patterns from reference copies
//! - [`CopyHistory`] / [`PerformanceMetrics`] - Generation log and aggregates
//! - [`export_copy`] / [`export_history`] / [`export_guidelines`] - File output
//! - [`CopywriterConfig`] - TOML configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use copy_agent::CopyAgent;
//! use copy_core::{BrandGuidelines, CopyConstraints, CopyRequest, FormatType};
//! use serde_json::json;
//!
//! let guidelines = BrandGuidelines::builder("Acme")
//!     .tones(["Professional"])
//!     .build()
//!     .unwrap();
//! let agent = CopyAgent::new(guidelines).unwrap();
//!
//! let constraints = CopyConstraints::builder()
//!     .format(FormatType::Table)
//!     .min_length(0)
//!     .build()
//!     .unwrap();
//! let request = CopyRequest::builder("Product Launch", constraints)
//!     .input("Turbo Mode", json!({"benefit": "Twice the speed"}))
//!     .build()
//!     .unwrap();
//!
//! let copy = agent.generate_copy(&request).unwrap();
//! assert_eq!(copy.content.as_table().unwrap().rows.len(), 1);
//! assert!(!agent.performance_metrics().is_empty());
//! ```

pub mod agent;
pub mod classify;
pub mod config;
pub mod export;
pub mod format;
pub mod history;
pub mod patterns;
pub mod prompt;
pub mod telemetry;

pub use agent::CopyAgent;
pub use classify::{ClassifiedInput, IMAGE_KEYS, classify_input};
pub use config::{CopywriterConfig, TelemetryConfig};
pub use export::{export_copy, export_guidelines, export_history};
pub use format::{ColumnRole, ContentFormatter, FALLBACK_BENEFITS, bullet_lines, call_to_action};
pub use history::{CopyHistory, HistoryRecord, PerformanceMetrics};
pub use patterns::{PatternMemory, ReferencePatterns};
pub use prompt::build_prompt;
pub use telemetry::init_telemetry;
