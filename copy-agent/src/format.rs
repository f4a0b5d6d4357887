//! Content formatting
//!
//! Turns classified input into either a table (one row per structured item)
//! or narrative text, applying brand phrasing and length normalization.

use crate::classify::ClassifiedInput;
use copy_compliance::normalize_length;
use copy_core::{BrandGuidelines, CopyConstraints, CopyContent, CopyTable};
use indexmap::IndexMap;
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;

/// Benefits used when an item names none. Only the first two are used.
pub const FALLBACK_BENEFITS: &[&str] =
    &["Enhanced efficiency", "Improved performance", "Better results"];

/// Benefits taken per item.
pub const MAX_BENEFITS: usize = 2;

/// Separator between benefits in one cell.
pub const BENEFIT_SEPARATOR: &str = " | ";

const PROFESSIONAL_PREFIX: &str = "Our solution delivers ";
const FRIENDLY_PREFIX: &str = "We help you with ";

const NAME_COLUMNS: &[&str] = &["feature", "title", "name"];
const BENEFIT_COLUMNS: &[&str] = &["benefit", "value", "advantage"];
const DESCRIPTION_COLUMNS: &[&str] = &["description", "detail", "copy"];
const BENEFIT_KEY_MARKERS: &[&str] = &["benefit", "advantage", "value"];

/// How a table column is filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnRole {
    /// The item's key
    Name,
    /// Generated benefit copy
    Benefit,
    /// Generated description copy
    Description,
    /// Direct lookup of this (lower-cased) field in the item
    Field(String),
}

impl ColumnRole {
    /// Resolve a column name case-insensitively.
    pub fn resolve(column: &str) -> Self {
        let lower = column.trim().to_lowercase();
        if NAME_COLUMNS.contains(&lower.as_str()) {
            ColumnRole::Name
        } else if BENEFIT_COLUMNS.contains(&lower.as_str()) {
            ColumnRole::Benefit
        } else if DESCRIPTION_COLUMNS.contains(&lower.as_str()) {
            ColumnRole::Description
        } else {
            ColumnRole::Field(lower)
        }
    }
}

/// Plain string form of a JSON value: strings unquoted, everything else compact JSON.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Formats classified input for one brand.
pub struct ContentFormatter<'a> {
    guidelines: &'a BrandGuidelines,
}

impl<'a> ContentFormatter<'a> {
    pub fn new(guidelines: &'a BrandGuidelines) -> Self {
        Self { guidelines }
    }

    /// Dispatch on the constraints' format type.
    pub fn format(&self, input: &ClassifiedInput, constraints: &CopyConstraints) -> CopyContent {
        if constraints.format_type.is_tabular() {
            CopyContent::Table(self.format_table(input, constraints))
        } else {
            CopyContent::Text(self.format_text(input, constraints))
        }
    }

    /// One row per structured item, with exactly the effective columns.
    pub fn format_table(
        &self,
        input: &ClassifiedInput,
        constraints: &CopyConstraints,
    ) -> CopyTable {
        let columns = constraints.effective_columns();
        let roles: Vec<ColumnRole> = columns.iter().map(|c| ColumnRole::resolve(c)).collect();
        let mut table = CopyTable::new(columns.clone());

        for (key, item) in &input.structured_data {
            let mut row = IndexMap::with_capacity(columns.len());
            for (column, role) in columns.iter().zip(&roles) {
                let cell = match role {
                    ColumnRole::Name => key.clone(),
                    ColumnRole::Benefit => self.benefit_copy(item, constraints),
                    ColumnRole::Description => {
                        self.description_copy(&Value::Object(item.clone()), constraints)
                    }
                    ColumnRole::Field(field) => item.get(field).map(value_text).unwrap_or_default(),
                };
                row.insert(column.clone(), cell);
            }
            table.push_row(row);
        }

        table
    }

    /// Up to two benefits named by the item, or the fallback benefits.
    pub fn benefit_copy(&self, item: &Map<String, Value>, constraints: &CopyConstraints) -> String {
        let named: Vec<String> = item
            .iter()
            .filter(|(k, _)| {
                let k = k.to_lowercase();
                BENEFIT_KEY_MARKERS.iter().any(|m| k.contains(m))
            })
            .take(MAX_BENEFITS)
            .map(|(_, v)| value_text(v))
            .collect();

        let benefits = if named.is_empty() {
            FALLBACK_BENEFITS.iter().take(MAX_BENEFITS).map(|b| b.to_string()).collect()
        } else {
            named
        };

        normalize_length(
            &benefits.join(BENEFIT_SEPARATOR),
            constraints,
            &self.guidelines.brand_name,
        )
    }

    /// The item as text, framed by the brand's first recognized tone.
    pub fn description_copy(&self, item: &Value, constraints: &CopyConstraints) -> String {
        let body = value_text(item);
        let description = format!("{}{}", self.tone_prefix(), body);
        normalize_length(&description, constraints, &self.guidelines.brand_name)
    }

    fn tone_prefix(&self) -> &'static str {
        for tone in &self.guidelines.tone_of_voice {
            let tone = tone.to_lowercase();
            if tone.contains("professional") {
                return PROFESSIONAL_PREFIX;
            }
            if tone.contains("friendly") {
                return FRIENDLY_PREFIX;
            }
        }
        ""
    }

    /// Lead key message, narrative input, then the call to action.
    pub fn format_text(&self, input: &ClassifiedInput, constraints: &CopyConstraints) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(3);

        if let Some(message) = self.guidelines.key_messaging.first() {
            parts.push(message.clone());
        }

        let blob = input.text_blob.trim_end();
        if !blob.is_empty() {
            parts.push(blob.to_string());
        }

        if constraints.call_to_action_required {
            parts.push(call_to_action(&self.guidelines.brand_name));
        }

        normalize_length(&parts.join(" "), constraints, &self.guidelines.brand_name)
    }
}

/// The fixed call-to-action sentence.
pub fn call_to_action(brand_name: &str) -> String {
    format!("Experience the {} difference today.", brand_name)
}

static BULLET_BREAK: OnceLock<Regex> = OnceLock::new();

fn bullet_break() -> &'static Regex {
    BULLET_BREAK.get_or_init(|| {
        Regex::new(r"[.!?]+(?:\s+|$)|\n").expect("Invalid regex pattern")
    })
}

/// Split text into bullet lines, one per sentence or input line.
///
/// Sentence punctuation only ends a bullet when followed by whitespace or the
/// end of the text, so "v2.0" and "example.com" stay intact.
pub fn bullet_lines(text: &str) -> Vec<String> {
    bullet_break()
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| format!("• {}", s))
        .collect()
}
