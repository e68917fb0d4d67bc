//! Record model.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::category::coerce_id;


/// A tagged record referencing a category.
///
/// Malformed fields deserialize to `None` rather than failing, so a single bad
/// value only removes that record from the statistic it feeds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(
        default,
        alias = "category_id",
        deserialize_with = "deserialize_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub category_id: Option<i64>,
    #[serde(
        default,
        alias = "numeric_value",
        deserialize_with = "deserialize_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub numeric_value: Option<f64>,
    #[serde(
        default,
        deserialize_with = "deserialize_location",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<String>,
    /// Fields the aggregation does not look at.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}


impl Record {
    pub fn new(category_id: i64, numeric_value: f64, location: impl Into<String>) -> Self {
        Self {
            category_id: Some(category_id),
            numeric_value: Some(numeric_value),
            location: Some(location.into()),
            extra: Map::new(),
        }
    }

    /// The numeric value, if present and finite.
    pub fn finite_value(&self) -> Option<f64> {
        self.numeric_value.filter(|v| v.is_finite())
    }

    /// The trimmed location, if non-empty.
    pub fn trimmed_location(&self) -> Option<&str> {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|loc| !loc.is_empty())
    }
}


/// Coerce a JSON value into a finite number.
fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                None
            } else {
                s.parse::<f64>().ok()
            }
        }
        _ => None,
    };
    number.filter(|v| v.is_finite())
}


fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_id(&value))
}


fn deserialize_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_number(&value))
}


fn deserialize_location<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        _ => None,
    })
}
