//! Copy requests and their heterogeneous input data.

use crate::constraints::CopyConstraints;
use crate::error::ValidationError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One value of a request's input data, resolved by shape at ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputValue {
    /// Free text, folded into the narrative blob
    Text(String),
    /// A formattable item with named sub-fields
    Structured(Map<String, Value>),
    /// A sequence; only image-like keys are kept
    List(Vec<Value>),
    /// Any other shape (numbers, booleans, null); ignored downstream
    Other(Value),
}

impl From<Value> for InputValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => InputValue::Text(s),
            Value::Object(map) => InputValue::Structured(map),
            Value::Array(items) => InputValue::List(items),
            other => InputValue::Other(other),
        }
    }
}

impl From<&str> for InputValue {
    fn from(value: &str) -> Self {
        InputValue::Text(value.to_string())
    }
}

impl From<String> for InputValue {
    fn from(value: String) -> Self {
        InputValue::Text(value)
    }
}

impl InputValue {
    pub fn kind(&self) -> &'static str {
        match self {
            InputValue::Text(_) => "text",
            InputValue::Structured(_) => "structured",
            InputValue::List(_) => "list",
            InputValue::Other(_) => "other",
        }
    }
}

/// A caller-constructed request. Read-only to the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopyRequest {
    /// Free-text category tag, e.g. "Product Launch"
    pub content_type: String,
    #[serde(default)]
    pub input_data: IndexMap<String, InputValue>,
    pub target_format: CopyConstraints,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Prior example texts; only seed pattern memory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_copies: Option<Vec<String>>,
}

impl CopyRequest {
    /// Create a request with no input data, validating the constraints.
    pub fn new(
        content_type: impl Into<String>,
        target_format: CopyConstraints,
    ) -> Result<Self, ValidationError> {
        Self::builder(content_type, target_format).build()
    }

    pub fn builder(
        content_type: impl Into<String>,
        target_format: CopyConstraints,
    ) -> CopyRequestBuilder {
        CopyRequestBuilder {
            inner: CopyRequest {
                content_type: content_type.into(),
                input_data: IndexMap::new(),
                target_format,
                context: None,
                reference_copies: None,
            },
        }
    }

    /// Validate the request.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.target_format.validate()
    }
}

/// Builder for [`CopyRequest`].
#[derive(Debug, Clone)]
pub struct CopyRequestBuilder {
    inner: CopyRequest,
}

impl CopyRequestBuilder {
    /// Insert an input value. Re-inserting a key keeps its original position.
    pub fn input(mut self, key: impl Into<String>, value: impl Into<InputValue>) -> Self {
        self.inner.input_data.insert(key.into(), value.into());
        self
    }

    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.inner.context = Some(context.into());
        self
    }

    pub fn reference_copies<I, S>(mut self, copies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.reference_copies = Some(copies.into_iter().map(Into::into).collect());
        self
    }

    /// Build and validate.
    pub fn build(self) -> Result<CopyRequest, ValidationError> {
        self.inner.validate()?;
        Ok(self.inner)
    }
}
