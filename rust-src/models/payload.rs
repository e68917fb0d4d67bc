//! Payload parsing for category and record lists.

use serde_json::Value;

use super::{Category, Record};


/// The two lists a render pass consumes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartPayload {
    pub categories: Vec<Category>,
    pub records: Vec<Record>,
}


impl ChartPayload {
    pub fn new(categories: Vec<Category>, records: Vec<Record>) -> Self {
        Self { categories, records }
    }

    /// Build a payload from a `{categories, records}` object.
    ///
    /// Missing or non-array fields default to empty lists.
    pub fn from_value(value: Value) -> Self {
        let Value::Object(mut fields) = value else {
            return Self::default();
        };

        Self {
            categories: categories_from_value(fields.remove("categories").unwrap_or(Value::Null)),
            records: records_from_value(fields.remove("records").unwrap_or(Value::Null)),
        }
    }

    /// Parse a payload from JSON text.
    pub fn from_json_str(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<Value>(text).map(Self::from_value)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.records.is_empty()
    }
}


/// Parse a category list. Non-arrays yield an empty list; unusable entries are skipped.
pub fn categories_from_value(value: Value) -> Vec<Category> {
    parse_array(value, "category")
}


/// Parse a record list. Non-arrays yield an empty list; non-object entries are skipped.
pub fn records_from_value(value: Value) -> Vec<Record> {
    parse_array(value, "record")
}


fn parse_array<T>(value: Value, kind: &str) -> Vec<T>
where
    T: serde::de::DeserializeOwned,
{
    let Value::Array(items) = value else {
        return Vec::new();
    };

    let mut parsed = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<T>(item) {
            Ok(entry) => parsed.push(entry),
            Err(e) => log::warn!("Skipping {kind} at index {index}: {e}"),
        }
    }
    parsed
}
