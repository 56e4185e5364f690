//! Opaque widget descriptor attached to input slots.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Widget descriptor controlling inline editing of a slot's default value.
///
/// Editors interpret the descriptor; this crate carries it through decode
/// as-is. The wire value must be a JSON object — anything else fails the
/// containing record's decode.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Widget(Map<String, Value>);

impl Widget {
    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns whether the descriptor carries no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the underlying field map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Widget {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
