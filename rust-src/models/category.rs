//! Category model.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;


/// A chart category. The list order defines left-to-right chart order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(deserialize_with = "deserialize_category_id")]
    pub id: i64,
    #[serde(default, deserialize_with = "deserialize_label")]
    pub name: String,
}


impl Category {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}


/// Coerce a JSON value into an integer id.
///
/// Accepts integers, integral floats and integer strings.
pub(crate) fn coerce_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral_f64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(integral_f64))
        }
        _ => None,
    }
}


fn integral_f64(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}


fn deserialize_category_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    coerce_id(&value)
        .ok_or_else(|| serde::de::Error::custom(format!("category id is not an integer: {value}")))
}


fn deserialize_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_id() {
        assert_eq!(coerce_id(&json!(7)), Some(7));
        assert_eq!(coerce_id(&json!(7.0)), Some(7));
        assert_eq!(coerce_id(&json!(" 12 ")), Some(12));
        assert_eq!(coerce_id(&json!(7.5)), None);
        assert_eq!(coerce_id(&json!("abc")), None);
        assert_eq!(coerce_id(&json!(null)), None);
        assert_eq!(coerce_id(&json!(true)), None);
    }

    #[test]
    fn test_category_from_json() {
        let category: Category = serde_json::from_value(json!({"id": "3", "name": "Cardiology"})).unwrap();
        assert_eq!(category, Category::new(3, "Cardiology"));
    }

    #[test]
    fn test_category_missing_name_defaults_to_empty() {
        let category: Category = serde_json::from_value(json!({"id": 1})).unwrap();
        assert_eq!(category.name, "");
    }

    #[test]
    fn test_category_bad_id_is_rejected() {
        let result = serde_json::from_value::<Category>(json!({"id": "x", "name": "A"}));
        assert!(result.is_err());
    }
}
