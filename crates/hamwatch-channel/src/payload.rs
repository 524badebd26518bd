//! Outbound message dictionaries and the device wire keys.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Newline-joined day band conditions (string).
pub const KEY_BANDS_DAY: &str = "KEY_BANDS_DAY";
/// Newline-joined night band conditions (string).
pub const KEY_BANDS_NIGHT: &str = "KEY_BANDS_NIGHT";
/// Whole-degree Celsius temperature (integer).
pub const KEY_TEMPERATURE_C: &str = "KEY_TEMPERATURE_C";
/// Whole-degree Fahrenheit temperature (integer).
pub const KEY_TEMPERATURE_F: &str = "KEY_TEMPERATURE_F";

/// One dictionary value. The watchface message dictionary only carries
/// strings and integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PayloadValue {
    Text(String),
    Int(i32),
}

impl From<String> for PayloadValue {
    fn from(value: String) -> Self {
        PayloadValue::Text(value)
    }
}

impl From<&str> for PayloadValue {
    fn from(value: &str) -> Self {
        PayloadValue::Text(value.to_string())
    }
}

impl From<i32> for PayloadValue {
    fn from(value: i32) -> Self {
        PayloadValue::Int(value)
    }
}

/// One outbound message dictionary, delivered to the device as a unit.
///
/// Entries keep insertion order so the framed message matches the order
/// the sending stage built it in. Key spellings are part of the wire
/// contract with the watchface and must match its dictionary exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutboundPayload {
    entries: Vec<(String, PayloadValue)>,
}

impl OutboundPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Keys are not deduplicated; each stage builds its
    /// dictionary once with distinct keys.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PayloadValue>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&PayloadValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PayloadValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Serialize for OutboundPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
