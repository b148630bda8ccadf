use serde::de::DeserializeOwned;
use serde_json::{Map, Value as JsonValue};

use crate::error::{ParamError, ParseError};

/// Field values resolved by the host for one invocation, keyed by field name.
///
/// Reads come in two flavors: `required_*` reads fail with [`ParamError::MissingRequired`],
/// `optional_*` reads treat a missing, `null` or empty value as absent and fall back to a
/// default instead of failing.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct FieldValues(Map<String, JsonValue>);

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_value(value: JsonValue) -> Result<Self, ParseError> {
        match value {
            JsonValue::Object(map) => Ok(Self(map)),
            JsonValue::Null => Ok(Self::default()),
            other => Err(ParseError::Shape {
                expected: "an object of field values",
                found: json_kind(&other),
            }),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<JsonValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&JsonValue> {
        self.0.get(name)
    }

    /// Non-empty string value, borrowed.
    pub fn optional_str_ref(&self, name: &str) -> Option<&str> {
        match self.0.get(name) {
            Some(JsonValue::String(s)) if !s.is_empty() => Some(s.as_str()),
            _ => None,
        }
    }

    /// Scalar value rendered as a string. Missing, `null`, `""`, `false` and `0` read as absent.
    pub fn optional_string(&self, name: &str) -> Option<String> {
        match self.0.get(name)? {
            JsonValue::String(s) if !s.is_empty() => Some(s.clone()),
            JsonValue::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
            JsonValue::Bool(true) => Some("true".to_string()),
            _ => None,
        }
    }

    pub fn required_string(&self, name: &str) -> Result<String, ParamError> {
        self.optional_string(name)
            .ok_or_else(|| ParamError::missing(name))
    }

    pub fn bool_or(&self, name: &str, default: bool) -> Result<bool, ParamError> {
        match self.0.get(name) {
            None | Some(JsonValue::Null) => Ok(default),
            Some(JsonValue::Bool(b)) => Ok(*b),
            Some(JsonValue::String(s)) => match s.trim() {
                "" => Ok(default),
                "true" => Ok(true),
                "false" => Ok(false),
                other => Err(ParamError::invalid(name, format!("expected a boolean, got {other:?}"))),
            },
            Some(other) => Err(ParamError::invalid(
                name,
                format!("expected a boolean, got {}", json_kind(other)),
            )),
        }
    }

    /// Deserializes the value, or `None` when it is missing, `null` or `""`.
    pub fn optional_typed<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, ParamError> {
        match self.0.get(name) {
            None | Some(JsonValue::Null) => Ok(None),
            Some(JsonValue::String(s)) if s.is_empty() => Ok(None),
            Some(v) => serde_json::from_value(v.clone())
                .map(Some)
                .map_err(|e| ParamError::invalid(name, e.to_string())),
        }
    }

    pub fn typed_or_default<T: DeserializeOwned + Default>(&self, name: &str) -> Result<T, ParamError> {
        Ok(self.optional_typed(name)?.unwrap_or_default())
    }

    /// Rows of a fixed collection.
    ///
    /// Accepts the wrapped shape `{"<group>": [rows]}` (or a single row object under the
    /// group), or a bare array of rows. Missing values read as no rows.
    pub fn collection_rows<T: DeserializeOwned>(&self, name: &str, group: &str) -> Result<Vec<T>, ParamError> {
        let rows = match self.0.get(name) {
            None | Some(JsonValue::Null) => return Ok(Vec::new()),
            Some(JsonValue::String(s)) if s.is_empty() => return Ok(Vec::new()),
            Some(JsonValue::Array(rows)) => rows.clone(),
            Some(JsonValue::Object(map)) => match map.get(group) {
                None | Some(JsonValue::Null) => Vec::new(),
                Some(JsonValue::Array(rows)) => rows.clone(),
                Some(row @ JsonValue::Object(_)) => vec![row.clone()],
                Some(other) => {
                    return Err(ParamError::invalid(
                        name,
                        format!("expected rows under {group:?}, got {}", json_kind(other)),
                    ))
                }
            },
            Some(other) => {
                return Err(ParamError::invalid(
                    name,
                    format!("expected a list of rows, got {}", json_kind(other)),
                ))
            }
        };
        rows.into_iter()
            .enumerate()
            .map(|(i, row)| {
                serde_json::from_value(row)
                    .map_err(|e| ParamError::invalid(format!("{name}.{group}[{i}]"), e.to_string()))
            })
            .collect()
    }
}

impl From<Map<String, JsonValue>> for FieldValues {
    fn from(map: Map<String, JsonValue>) -> Self {
        Self(map)
    }
}

pub(crate) fn json_kind(v: &JsonValue) -> &'static str {
    match v {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn zero_and_empty_read_as_absent() {
        let values = FieldValues::new()
            .with("a", "")
            .with("b", 0)
            .with("c", 3)
            .with("d", JsonValue::Null);
        assert_eq!(values.optional_string("a"), None);
        assert_eq!(values.optional_string("b"), None);
        assert_eq!(values.optional_string("c").as_deref(), Some("3"));
        assert_eq!(values.optional_string("d"), None);
        assert_eq!(values.optional_string("missing"), None);
    }

    #[test]
    fn bool_accepts_strings_and_defaults() {
        let values = FieldValues::new().with("x", "true").with("y", json!(false));
        assert!(values.bool_or("x", false).unwrap());
        assert!(!values.bool_or("y", true).unwrap());
        assert!(values.bool_or("z", true).unwrap());
        assert!(FieldValues::new().with("w", 5).bool_or("w", true).is_err());
    }

    #[test]
    fn collection_rows_accepts_wrapped_and_bare() {
        let wrapped = FieldValues::new().with("t", json!({"tags": [{"tag": "a"}, {"tag": "b"}]}));
        let bare = FieldValues::new().with("t", json!([{"tag": "a"}]));
        let rows: Vec<JsonValue> = wrapped.collection_rows("t", "tags").unwrap();
        assert_eq!(rows.len(), 2);
        let rows: Vec<JsonValue> = bare.collection_rows("t", "tags").unwrap();
        assert_eq!(rows.len(), 1);
        let rows: Vec<JsonValue> = FieldValues::new().collection_rows("t", "tags").unwrap();
        assert!(rows.is_empty());
    }
}
