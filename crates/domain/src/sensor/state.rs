//! Sensor state: value, attributes, and options for one update cycle.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::AttributeValue;
use crate::time::Timestamp;

/// The value a sensor reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SensorValue {
    Int(i64),
    Timestamp(Timestamp),
    Text(String),
}

impl fmt::Display for SensorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => value.fmt(f),
            Self::Timestamp(at) => f.write_str(&at.to_rfc3339()),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<String> for SensorValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Timestamp> for SensorValue {
    fn from(value: Timestamp) -> Self {
        Self::Timestamp(value)
    }
}

impl From<i64> for SensorValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

/// Everything a sensor publishes after one update cycle.
///
/// Built fresh every cycle and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SensorState {
    /// `None` when no value could be derived (unknown to the host).
    pub value: Option<SensorValue>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, AttributeValue>,
    /// The full list of allowed values, for [`ValueKind::Enum`](super::ValueKind::Enum) sensors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl SensorState {
    /// A state carrying `value` and nothing else.
    #[must_use]
    pub fn new(value: impl Into<SensorValue>) -> Self {
        Self::maybe(Some(value.into()))
    }

    /// A state whose value may be missing.
    #[must_use]
    pub fn maybe(value: Option<SensorValue>) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    /// A state with no value.
    #[must_use]
    pub fn unknown() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_attribute(
        mut self,
        name: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = Some(options);
        self
    }

    #[must_use]
    pub fn get_attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }
}
