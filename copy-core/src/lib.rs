//! # copy-core
//!
//! Core types for brand-compliant copy generation.
//!
//! ## Overview
//!
//! - [`BrandGuidelines`] - Brand voice, vocabulary and audience
//! - [`CopyConstraints`] - Target length, format and call-to-action rules
//! - [`CopyRequest`] / [`InputValue`] - Caller input, tagged by shape
//! - [`GeneratedCopy`] / [`CopyContent`] - Text or tabular results
//! - [`TextGenerator`] - Seam for language-model providers
//! - [`CopyError`] / [`Result`] - Unified error handling
//!
//! ## Quick Start
//!
//! ```rust
//! use copy_core::{BrandGuidelines, CopyConstraints, CopyRequest, FormatType};
//!
//! let guidelines = BrandGuidelines::builder("Acme")
//!     .tones(["Professional"])
//!     .avoid_words(["cheap"])
//!     .build()
//!     .unwrap();
//!
//! let constraints = CopyConstraints::builder()
//!     .format(FormatType::Paragraph)
//!     .min_length(5)
//!     .max_length(40)
//!     .build()
//!     .unwrap();
//!
//! let request = CopyRequest::builder("Product Launch", constraints)
//!     .input("main_content", "A faster widget for busy teams")
//!     .build()
//!     .unwrap();
//! assert_eq!(request.input_data.len(), 1);
//! # let _ = guidelines;
//! ```

pub mod constraints;
pub mod content;
pub mod error;
pub mod generator;
pub mod guidelines;
pub mod request;

pub use constraints::{CopyConstraints, CopyConstraintsBuilder, DEFAULT_COLUMNS, FormatType};
pub use content::{CELL_SEPARATOR, CopyContent, CopyTable, GeneratedCopy};
pub use error::{CopyError, Result, ValidationError};
pub use generator::{PLACEHOLDER_COPY, PlaceholderGenerator, TextGenerator};
pub use guidelines::{BrandGuidelines, BrandGuidelinesBuilder};
pub use request::{CopyRequest, CopyRequestBuilder, InputValue};
