//! Slot records and their wire decoding.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::TRACING_TARGET;
use crate::error::DecodeResult;
use crate::handle::{NodeHandle, PropertyHandle};
use crate::widget::Widget;

/// A connection point on a graph node.
///
/// Input slots accept at most one incoming link; output slots feed any
/// number of outgoing links. The accepted data type(s) arrive on the wire
/// either as a single name or as a list of alternatives and are collapsed
/// into one canonical, pipe-joined string during decode, so everything past
/// this boundary reasons about a single string form.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    /// Display and lookup name. Not guaranteed unique within a node.
    pub name: String,
    /// Canonical accepted data type(s), pipe-joined when multiple.
    pub data_type: String,
    /// Auxiliary classifier for the data type. Zero until a later pass
    /// assigns it; never read during decode.
    pub type_tag: i64,
    /// Handle to the owning node, assigned when the containing document
    /// is decoded. Not part of the wire format.
    pub node: Option<NodeHandle>,
    /// Link table index for an input slot. Zero when unconnected or not
    /// applicable.
    pub link: i64,
    /// Link table indices for an output slot. `None` when the wire record
    /// carried no `links` field at all.
    pub links: Option<Vec<i64>>,
    /// Inline widget descriptor, present on certain input slots.
    pub widget: Option<Widget>,
    /// Connector shape hint for rendering.
    pub shape: Option<i64>,
    /// Position among the node's input or output slots. The two lists are
    /// indexed independently.
    pub slot_index: Option<i64>,
    /// Exported-widget property, assigned by the property resolution pass
    /// for promoted inputs. Not part of the wire format.
    pub property: Option<PropertyHandle>,
}

impl Slot {
    /// Decodes one slot record from raw wire bytes.
    pub fn from_slice(bytes: &[u8]) -> DecodeResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Decodes one slot record from an already-parsed JSON value.
    pub fn from_value(value: Value) -> DecodeResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Returns the individual type names in the canonical type string.
    pub fn accepted_types(&self) -> impl Iterator<Item = &str> {
        self.data_type.split('|').filter(|name| !name.is_empty())
    }

    /// Returns whether the slot accepts the given data type name.
    pub fn accepts(&self, type_name: &str) -> bool {
        self.accepted_types().any(|name| name == type_name)
    }

    /// Returns whether an input slot has an incoming link.
    pub fn has_link(&self) -> bool {
        self.link != 0
    }

    /// Returns the link indices of an output slot, empty when none were
    /// decoded.
    pub fn output_links(&self) -> &[i64] {
        self.links.as_deref().unwrap_or_default()
    }
}

/// Wire-shaped mirror of [`Slot`] with the `type` field left raw.
#[derive(Deserialize)]
struct RawSlot {
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    data_type: Option<Value>,
    link: Option<i64>,
    links: Option<Vec<i64>>,
    widget: Option<Widget>,
    shape: Option<i64>,
    slot_index: Option<i64>,
}

impl<'de> Deserialize<'de> for Slot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawSlot::deserialize(deserializer)?;

        Ok(Slot {
            name: raw.name,
            data_type: canonical_data_type(raw.data_type.unwrap_or_default()),
            type_tag: 0,
            node: None,
            link: raw.link.unwrap_or_default(),
            links: raw.links,
            widget: raw.widget,
            shape: raw.shape,
            slot_index: raw.slot_index,
            property: None,
        })
    }
}

/// Collapses the polymorphic wire `type` value into the canonical string.
///
/// - `null` (or an absent field) becomes the empty string
/// - a string passes through unchanged
/// - a list keeps only its string elements, joined with `|` in order
/// - anything else is kept as its compact JSON text
fn canonical_data_type(raw: Value) -> String {
    match raw {
        Value::Null => String::new(),
        Value::String(name) => name,
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join("|"),
        other => {
            let text = other.to_string();
            tracing::debug!(
                target: TRACING_TARGET,
                raw = %text,
                "Slot type field had unexpected shape, keeping textual form"
            );
            text
        }
    }
}
