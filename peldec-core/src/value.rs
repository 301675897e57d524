//! Ordered field mapping produced by decoders.
//!
//! Decoded output is a human-facing ordered report, not an unordered
//! record: the serializer must walk fields in the order the decoder
//! inserted them. [`FieldMap`] preserves insertion order end to end, and
//! [`FieldValue`] is a closed union of JSON-representable shapes, so a
//! decoder cannot construct a value the serializer would reject.

use indexmap::IndexMap;
use serde::Serialize;

/// A single decoded field value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Free-form text.
    Text(String),
    /// Unsigned integer (positions, counts, raw register values).
    Unsigned(u64),
    /// Signed integer.
    Signed(i64),
    /// A nested ordered mapping.
    Nested(FieldMap),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        FieldValue::Unsigned(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Unsigned(value.into())
    }
}

impl From<u16> for FieldValue {
    fn from(value: u16) -> Self {
        FieldValue::Unsigned(value.into())
    }
}

impl From<u8> for FieldValue {
    fn from(value: u8) -> Self {
        FieldValue::Unsigned(value.into())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Signed(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Signed(value.into())
    }
}

impl From<FieldMap> for FieldValue {
    fn from(value: FieldMap) -> Self {
        FieldValue::Nested(value)
    }
}

/// An insertion-ordered mapping from field name to [`FieldValue`].
///
/// This is the intermediate representation every decoder produces before
/// serialization. Field order is significant and survives [`to_json`].
///
/// [`to_json`]: FieldMap::to_json
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct FieldMap {
    fields: IndexMap<String, FieldValue>,
}

impl FieldMap {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field.
    ///
    /// Re-inserting an existing name replaces the value but keeps the
    /// name's original position, so serialized output never contains
    /// duplicate keys.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Append a field, chainable form.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the mapping holds no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Serialize to compact JSON, preserving field order.
    ///
    /// Always returns syntactically valid JSON: the value union admits
    /// only shapes `serde_json` can encode, so the error arm is
    /// unreachable.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{}"))
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
