//! Output shape constraints.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;

/// Columns used for table output when none are configured.
pub const DEFAULT_COLUMNS: &[&str] = &["Feature", "Benefit", "Description"];

/// Target format of generated copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatType {
    Table,
    #[serde(alias = "bullet_points")]
    Bullet,
    #[default]
    Paragraph,
}

impl FormatType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatType::Table => "table",
            FormatType::Bullet => "bullet",
            FormatType::Paragraph => "paragraph",
        }
    }

    /// Table output, as opposed to free text.
    pub fn is_tabular(&self) -> bool {
        matches!(self, FormatType::Table)
    }
}

impl std::fmt::Display for FormatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(FormatType::Table),
            "bullet" | "bullets" | "bullet_points" => Ok(FormatType::Bullet),
            "paragraph" => Ok(FormatType::Paragraph),
            other => Err(ValidationError::new(
                "format_type",
                format!("Unknown format type '{}'", other),
            )
            .with_suggestion("Use one of: table, bullet, paragraph")),
        }
    }
}

/// Target shape of generated copy. Lengths are word counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopyConstraints {
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    #[serde(default)]
    pub format_type: FormatType,
    /// Only used for table output
    #[serde(default)]
    pub required_columns: Vec<String>,
    /// Descriptive, not cross-checked against the guidelines' tone of voice
    #[serde(default = "default_tone")]
    pub tone: String,
    #[serde(default)]
    pub call_to_action_required: bool,
}

fn default_max_length() -> usize {
    50
}

fn default_min_length() -> usize {
    10
}

fn default_tone() -> String {
    "professional".to_string()
}

impl Default for CopyConstraints {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
            min_length: default_min_length(),
            format_type: FormatType::default(),
            required_columns: Vec::new(),
            tone: default_tone(),
            call_to_action_required: false,
        }
    }
}

impl CopyConstraints {
    pub fn builder() -> CopyConstraintsBuilder {
        CopyConstraintsBuilder::default()
    }

    /// Columns for table output, falling back to [`DEFAULT_COLUMNS`].
    pub fn effective_columns(&self) -> Vec<String> {
        if self.required_columns.is_empty() {
            DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect()
        } else {
            self.required_columns.clone()
        }
    }

    /// Whether `count` words satisfy both bounds.
    pub fn accepts(&self, count: usize) -> bool {
        (self.min_length..=self.max_length).contains(&count)
    }

    /// Validate the constraints.
    ///
    /// Checks:
    /// - max_length is non-zero
    /// - max_length >= min_length
    /// - table columns are non-blank and unique
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_length == 0 {
            return Err(ValidationError::new("max_length", "Maximum length must be greater than 0")
                .with_suggestion("Set max_length to at least 1 word"));
        }

        if self.max_length < self.min_length {
            return Err(ValidationError::new(
                "max_length",
                format!(
                    "Maximum length {} is below minimum length {}",
                    self.max_length, self.min_length
                ),
            )
            .with_suggestion("Raise max_length or lower min_length"));
        }

        let mut seen = HashSet::new();
        for column in &self.required_columns {
            if column.trim().is_empty() {
                return Err(ValidationError::new(
                    "required_columns",
                    "Column names cannot be blank",
                ));
            }
            if !seen.insert(column.to_lowercase()) {
                return Err(ValidationError::new(
                    "required_columns",
                    format!("Duplicate column '{}'", column),
                )
                .with_suggestion("Column names are matched case-insensitively; keep each once"));
            }
        }

        Ok(())
    }
}

/// Builder for [`CopyConstraints`].
#[derive(Debug, Clone, Default)]
pub struct CopyConstraintsBuilder {
    inner: CopyConstraints,
}

impl CopyConstraintsBuilder {
    pub fn max_length(mut self, words: usize) -> Self {
        self.inner.max_length = words;
        self
    }

    pub fn min_length(mut self, words: usize) -> Self {
        self.inner.min_length = words;
        self
    }

    pub fn format(mut self, format_type: FormatType) -> Self {
        self.inner.format_type = format_type;
        self
    }

    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.inner.required_columns.push(column.into());
        self
    }

    pub fn tone(mut self, tone: impl Into<String>) -> Self {
        self.inner.tone = tone.into();
        self
    }

    pub fn call_to_action(mut self, required: bool) -> Self {
        self.inner.call_to_action_required = required;
        self
    }

    /// Build and validate.
    pub fn build(self) -> Result<CopyConstraints, ValidationError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    /// Build without validation.
    pub fn build_unchecked(self) -> CopyConstraints {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let constraints = CopyConstraints::default();
        assert_eq!(constraints.max_length, 50);
        assert_eq!(constraints.min_length, 10);
        assert_eq!(constraints.format_type, FormatType::Paragraph);
        assert_eq!(constraints.effective_columns(), vec!["Feature", "Benefit", "Description"]);
        assert!(constraints.validate().is_ok());
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let err = CopyConstraints::builder().min_length(20).max_length(5).build().unwrap_err();
        assert_eq!(err.field, "max_length");
        assert!(err.message.contains("below minimum"));
    }

    #[test]
    fn test_zero_max_rejected() {
        let err = CopyConstraints::builder().min_length(0).max_length(0).build().unwrap_err();
        assert_eq!(err.field, "max_length");
    }

    #[test]
    fn test_duplicate_columns_rejected() {
        let err = CopyConstraints::builder()
            .format(FormatType::Table)
            .column("Feature")
            .column("feature")
            .build()
            .unwrap_err();
        assert_eq!(err.field, "required_columns");
    }

    #[test]
    fn test_format_type_parsing() {
        assert_eq!("table".parse::<FormatType>().unwrap(), FormatType::Table);
        assert_eq!("Bullet_Points".parse::<FormatType>().unwrap(), FormatType::Bullet);
        assert_eq!(" paragraph ".parse::<FormatType>().unwrap(), FormatType::Paragraph);
        assert!("haiku".parse::<FormatType>().is_err());
    }

    #[test]
    fn test_format_type_serde_alias() {
        let parsed: FormatType = serde_json::from_str("\"bullet_points\"").unwrap();
        assert_eq!(parsed, FormatType::Bullet);
        assert_eq!(serde_json::to_string(&FormatType::Table).unwrap(), "\"table\"");
        assert!(serde_json::from_str::<FormatType>("\"haiku\"").is_err());
    }

    #[test]
    fn test_accepts() {
        let constraints = CopyConstraints::builder().min_length(2).max_length(4).build().unwrap();
        assert!(!constraints.accepts(1));
        assert!(constraints.accepts(2));
        assert!(constraints.accepts(4));
        assert!(!constraints.accepts(5));
    }
}
