use thiserror::Error;

use crate::types::{Operation, Resource};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse as JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("expected {expected}, found {found}")]
    Shape {
        expected: &'static str,
        found: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("unknown resource: {0}")]
    UnknownResource(String),
    #[error("unknown operation: {0}")]
    UnknownOperation(String),
    #[error("operation {operation} does not belong to resource {resource}")]
    ResourceMismatch {
        resource: Resource,
        operation: Operation,
    },
    #[error("{field}: required field is missing")]
    MissingRequired { field: String },
    #[error("{field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl ParamError {
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingRequired {
            field: field.into(),
        }
    }
}

/// Every violation found by one parameter pass.
#[derive(Debug, Clone, Error)]
#[error("parameters for {operation} failed validation ({violations_len} violations)")]
pub struct ParamsError {
    pub operation: Operation,
    pub violations: Vec<ParamError>,
    violations_len: usize,
}

impl ParamsError {
    pub fn new(operation: Operation, violations: Vec<ParamError>) -> Self {
        let violations_len = violations.len();
        Self {
            operation,
            violations,
            violations_len,
        }
    }
}
