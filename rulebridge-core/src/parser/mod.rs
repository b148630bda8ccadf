use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::error::ParseError;
use crate::params::FieldValues;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
    Auto,
}

#[derive(Debug, Clone)]
pub struct Parsed<T> {
    pub value: T,
    pub format: DocumentFormat,
}

/// Parses a JSON or YAML document into `T`.
pub fn parse_str<T: DeserializeOwned>(input: &str, format: DocumentFormat) -> Result<Parsed<T>, ParseError> {
    match format {
        DocumentFormat::Json => Ok(Parsed {
            value: serde_json::from_str::<T>(input)?,
            format,
        }),
        DocumentFormat::Yaml => Ok(Parsed {
            value: serde_yaml::from_str::<T>(input)?,
            format,
        }),
        DocumentFormat::Auto => parse_auto(input),
    }
}

fn parse_auto<T: DeserializeOwned>(input: &str) -> Result<Parsed<T>, ParseError> {
    // JSON always starts with `{` or `[` after trimming; YAML is a superset, so it is the fallback.
    let trimmed = input.trim_start();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return match serde_json::from_str::<T>(input) {
            Ok(value) => Ok(Parsed {
                value,
                format: DocumentFormat::Json,
            }),
            Err(e) => match serde_yaml::from_str::<T>(input) {
                Ok(value) => Ok(Parsed {
                    value,
                    format: DocumentFormat::Yaml,
                }),
                Err(_) => Err(ParseError::Json(e)),
            },
        };
    }

    match serde_yaml::from_str::<T>(input) {
        Ok(value) => Ok(Parsed {
            value,
            format: DocumentFormat::Yaml,
        }),
        Err(e) => match serde_json::from_str::<T>(input) {
            Ok(value) => Ok(Parsed {
                value,
                format: DocumentFormat::Json,
            }),
            Err(_) => Err(ParseError::Yaml(e)),
        },
    }
}

/// Parses an object of field values.
pub fn parse_field_values(input: &str) -> Result<FieldValues, ParseError> {
    let parsed = parse_str::<JsonValue>(input, DocumentFormat::Auto)?;
    FieldValues::from_value(parsed.value)
}

/// Parses input items: an array is a list of items, any other value is a single item.
pub fn parse_items(input: &str) -> Result<Vec<JsonValue>, ParseError> {
    let parsed = parse_str::<JsonValue>(input, DocumentFormat::Auto)?;
    Ok(match parsed.value {
        JsonValue::Array(items) => items,
        JsonValue::Null => Vec::new(),
        other => vec![other],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_json_and_yaml() {
        let json = parse_str::<JsonValue>(r#"{"ruleId": "abc"}"#, DocumentFormat::Auto).unwrap();
        assert_eq!(json.format, DocumentFormat::Json);
        let yaml = parse_str::<JsonValue>("ruleId: abc\nruleVersion: 2\n", DocumentFormat::Auto).unwrap();
        assert_eq!(yaml.format, DocumentFormat::Yaml);
        assert_eq!(yaml.value["ruleVersion"], 2);
    }

    #[test]
    fn field_values_must_be_an_object() {
        assert!(parse_field_values("[1, 2]").is_err());
        let values = parse_field_values("ruleId: abc").unwrap();
        assert_eq!(values.optional_string("ruleId").as_deref(), Some("abc"));
    }

    #[test]
    fn single_item_is_wrapped() {
        assert_eq!(parse_items(r#"{"a": 1}"#).unwrap().len(), 1);
        assert_eq!(parse_items(r#"[{"a": 1}, {"a": 2}]"#).unwrap().len(), 2);
    }
}
