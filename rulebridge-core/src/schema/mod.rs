//! Declarative description of every user-visible field of the node.
//!
//! The table in [`table`] is pure data. Visibility is the only behavior: a field is shown
//! when the selected operation is one of its operations and, for fields bound to an
//! identifier discriminator, when the discriminator currently holds the matching value.

mod table;

use serde::ser::{Serialize, Serializer};
use serde_json::{json, Value as JsonValue};

use crate::params::FieldValues;
use crate::types::{Operation, Resource};

pub use table::FIELDS;

/// Discriminator selecting ID vs path addressing for rules.
pub const IDENTIFIER_TYPE: &str = "identifierType";
/// Discriminator selecting ID vs path addressing for folders.
pub const IDENTIFIER_TYPE_FOLDER: &str = "identifierTypeFolder";

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Choice {
    pub name: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FieldKind {
    String,
    Number,
    Boolean,
    /// A list of strings.
    MultiString,
    Options { options: &'static [Choice] },
    /// Optional sub-fields, each added on demand.
    Collection { options: &'static [FieldSpec] },
    /// Repeated rows wrapped under `group`, e.g. `{"tags": [{"tag": "a"}]}`.
    FixedCollection {
        group: &'static str,
        values: &'static [FieldSpec],
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    Absent,
    Text(&'static str),
    Bool(bool),
    EmptyObject,
    EmptyList,
}

impl DefaultValue {
    pub fn to_json(self) -> Option<JsonValue> {
        match self {
            DefaultValue::Absent => None,
            DefaultValue::Text(s) => Some(JsonValue::String(s.to_string())),
            DefaultValue::Bool(b) => Some(JsonValue::Bool(b)),
            DefaultValue::EmptyObject => Some(json!({})),
            DefaultValue::EmptyList => Some(json!([])),
        }
    }
}

impl Serialize for DefaultValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// When a field is shown.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Show {
    pub operations: &'static [Operation],
    /// `(discriminator field, required value)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub when: Option<(&'static str, &'static str)>,
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub name: &'static str,
    pub display_name: &'static str,
    #[serde(flatten)]
    pub kind: FieldKind,
    pub default: DefaultValue,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<Show>,
}

impl FieldSpec {
    /// Whether this field is shown for `operation` given the current discriminator values.
    pub fn is_visible(&self, operation: Operation, values: &FieldValues) -> bool {
        let Some(show) = &self.show else {
            return false;
        };
        if !show.operations.contains(&operation) {
            return false;
        }
        match show.when {
            None => true,
            Some((discriminator, expected)) => {
                discriminator_value(discriminator, operation, values) == expected
            }
        }
    }
}

/// Current value of a discriminator: the supplied value, else the field's default.
pub fn discriminator_value<'a>(
    discriminator: &str,
    operation: Operation,
    values: &'a FieldValues,
) -> &'a str {
    if let Some(v) = values.optional_str_ref(discriminator) {
        return v;
    }
    FIELDS
        .iter()
        .filter(|f| f.name == discriminator)
        .find(|f| f.show.is_some_and(|s| s.operations.contains(&operation)))
        .and_then(|f| match f.default {
            DefaultValue::Text(s) => Some(s),
            _ => None,
        })
        .unwrap_or("id")
}

/// Ordered set of fields visible for `(resource, operation)`.
///
/// Returns nothing when the operation does not belong to the resource, so a form can never
/// show fields of an operation from another resource.
pub fn visible_fields(
    resource: Resource,
    operation: Operation,
    values: &FieldValues,
) -> Vec<&'static FieldSpec> {
    if operation.resource() != resource {
        return Vec::new();
    }
    FIELDS
        .iter()
        .filter(|f| f.is_visible(operation, values))
        .collect()
}

/// Operation choices presented for a resource.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationChoice {
    pub name: &'static str,
    pub value: Operation,
    pub description: &'static str,
    pub action: &'static str,
}

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSchema {
    pub name: &'static str,
    pub value: Resource,
    pub default_operation: Operation,
    pub operations: Vec<OperationChoice>,
}

pub fn resource_schema(resource: Resource) -> ResourceSchema {
    ResourceSchema {
        name: resource.display_name(),
        value: resource,
        default_operation: resource.default_operation(),
        operations: resource
            .operations()
            .into_iter()
            .map(|op| OperationChoice {
                name: op.display_name(),
                value: op,
                description: op.description(),
                action: op.action(),
            })
            .collect(),
    }
}

pub fn node_schema() -> Vec<ResourceSchema> {
    Resource::ALL.iter().copied().map(resource_schema).collect()
}
