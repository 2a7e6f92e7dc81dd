use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::PropertyName;

/// Scalar shape a declared property can hold.
///
/// The schema records shape only; nothing validates the values an instance
/// actually stores against it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    /// Free-form text.
    Text,
    /// Floating point number.
    Number,
    /// Boolean flag.
    Boolean,
    /// UTC timestamp.
    Timestamp,
    /// Structured JSON payload, e.g. coordinates or extent descriptions.
    Payload,
}

/// A scalar value carried by an instance or an edge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyValue {
    Text(String),
    Number(f64),
    Boolean(bool),
    Timestamp(DateTime<Utc>),
    Payload(serde_json::Value),
}

impl PropertyValue {
    /// Returns the [`PropertyType`] this value inhabits.
    #[must_use]
    pub fn value_type(&self) -> PropertyType {
        match self {
            Self::Text(_) => PropertyType::Text,
            Self::Number(_) => PropertyType::Number,
            Self::Boolean(_) => PropertyType::Boolean,
            Self::Timestamp(_) => PropertyType::Timestamp,
            Self::Payload(_) => PropertyType::Payload,
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<DateTime<Utc>> for PropertyValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

impl From<serde_json::Value> for PropertyValue {
    fn from(value: serde_json::Value) -> Self {
        Self::Payload(value)
    }
}

/// A named property slot declared on an entity kind or an edge schema.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyDeclaration {
    name: PropertyName,
    value_type: PropertyType,
}

impl PropertyDeclaration {
    /// Creates a new declaration pairing a name with its scalar shape.
    #[must_use]
    pub fn new(name: PropertyName, value_type: PropertyType) -> Self {
        Self { name, value_type }
    }

    /// Returns the declared property name.
    #[must_use]
    pub fn name(&self) -> &PropertyName {
        &self.name
    }

    /// Returns the declared scalar shape.
    #[must_use]
    pub fn value_type(&self) -> PropertyType {
        self.value_type
    }
}
