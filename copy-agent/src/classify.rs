//! Input classification
//!
//! Splits a request's input data into a narrative text blob, structured items
//! and image hints.

use copy_core::InputValue;
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// List keys treated as image references (matched case-insensitively).
pub const IMAGE_KEYS: &[&str] = &["images", "photos", "visuals"];

/// Input data partitioned by shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifiedInput {
    /// `"{key}: {value}\n"` per text entry, in input order
    pub text_blob: String,
    /// Structured items keyed by their input key, in input order
    pub structured_data: IndexMap<String, Map<String, Value>>,
    /// Items from image-like lists; hints only
    pub image_descriptions: Vec<Value>,
}

impl ClassifiedInput {
    pub fn is_empty(&self) -> bool {
        self.text_blob.is_empty()
            && self.structured_data.is_empty()
            && self.image_descriptions.is_empty()
    }
}

fn is_image_key(key: &str) -> bool {
    let key = key.to_lowercase();
    IMAGE_KEYS.contains(&key.as_str())
}

/// Partition `input` by value shape. Unrecognized shapes are dropped.
pub fn classify_input(input: &IndexMap<String, InputValue>) -> ClassifiedInput {
    let mut classified = ClassifiedInput::default();

    for (key, value) in input {
        match value {
            InputValue::Text(text) => {
                classified.text_blob.push_str(&format!("{}: {}\n", key, text));
            }
            InputValue::Structured(map) => {
                classified.structured_data.insert(key.clone(), map.clone());
            }
            InputValue::List(items) if is_image_key(key) => {
                classified.image_descriptions.extend(items.iter().cloned());
            }
            other => {
                tracing::debug!(key = %key, kind = other.kind(), "dropping unclassified input");
            }
        }
    }

    classified
}
