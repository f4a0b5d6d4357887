//! Configuration for the copywriter.
//!
//! Configuration is read from TOML:
//!
//! ```toml
//! [brand]
//! brand_name = "Acme"
//! tone_of_voice = ["Professional", "Friendly"]
//! avoid_words = ["cheap"]
//!
//! [defaults]
//! max_length = 40
//! min_length = 8
//! format_type = "paragraph"
//!
//! [telemetry]
//! service_name = "copywriter"
//! log_level = "info"
//! ```
//!
//! `COPYWRITER_LOG_LEVEL` and `COPYWRITER_SERVICE_NAME` override the
//! telemetry section.

use copy_core::{BrandGuidelines, CopyConstraints, CopyError, Result, ValidationError};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_service_name")]
    pub service_name: String,
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_service_name() -> String {
    "copywriter".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            log_level: default_log_level(),
        }
    }
}

impl TelemetryConfig {
    /// Apply `COPYWRITER_*` environment overrides.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("COPYWRITER_LOG_LEVEL") {
            self.log_level = level;
        }
        if let Some(name) = lookup("COPYWRITER_SERVICE_NAME") {
            self.service_name = name;
        }
    }

    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ValidationError::new(
                "log_level",
                format!("Invalid log level '{}'", self.log_level),
            )
            .with_suggestion(format!("Valid log levels: {:?}", VALID_LOG_LEVELS)));
        }

        if self.service_name.trim().is_empty() {
            return Err(ValidationError::new("service_name", "Service name cannot be empty")
                .with_suggestion("Set COPYWRITER_SERVICE_NAME or use default 'copywriter'"));
        }

        Ok(())
    }
}

/// Top-level configuration: the brand, default constraints and logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopywriterConfig {
    pub brand: BrandGuidelines,
    #[serde(default)]
    pub defaults: CopyConstraints,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl CopywriterConfig {
    pub fn new(brand: BrandGuidelines) -> Self {
        Self {
            brand,
            defaults: CopyConstraints::default(),
            telemetry: TelemetryConfig::default(),
        }
    }

    /// Parse TOML, apply environment overrides and validate.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: CopywriterConfig = toml::from_str(content)
            .map_err(|e| CopyError::config(format!("Failed to parse config: {}", e)))?;
        config.telemetry.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CopyError::config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Validate every section.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        self.brand.validate()?;
        self.defaults.validate()?;
        self.telemetry.validate()
    }

    /// Serialize back to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CopyError::Serialization(format!("Failed to serialize config: {}", e)))
    }
}
