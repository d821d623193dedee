//! Input contract: a bare string or an object with a `text` field.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CompensationError, Result};

/// Text accepted by the parse entry points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompensationInput {
    /// Plain text.
    Text(String),
    /// Document wrapper, e.g. `{"text": "...", "source": "..."}`.
    Document { text: String },
}

impl CompensationInput {
    /// The text to scan.
    pub fn text(&self) -> &str {
        match self {
            CompensationInput::Text(text) => text,
            CompensationInput::Document { text } => text,
        }
    }

    /// Accept a JSON string or an object exposing a string `text` field.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::String(text) => Ok(CompensationInput::Text(text.clone())),
            Value::Object(map) => match map.get("text") {
                Some(Value::String(text)) => Ok(CompensationInput::Document { text: text.clone() }),
                _ => Err(CompensationError::InvalidInputKind {
                    kind: "object".to_string(),
                }),
            },
            other => Err(CompensationError::InvalidInputKind {
                kind: json_kind(other).to_string(),
            }),
        }
    }

    /// Parse a JSON document into an input.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }
}

impl TryFrom<&Value> for CompensationInput {
    type Error = CompensationError;

    fn try_from(value: &Value) -> Result<Self> {
        Self::from_value(value)
    }
}

impl TryFrom<Value> for CompensationInput {
    type Error = CompensationError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(&value)
    }
}

impl From<&str> for CompensationInput {
    fn from(text: &str) -> Self {
        CompensationInput::Text(text.to_string())
    }
}

impl From<String> for CompensationInput {
    fn from(text: String) -> Self {
        CompensationInput::Text(text)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
