#![forbid(unsafe_code)]

//! Operation catalogue, parameter schema and typed parameters for the rules service node.

pub mod error;
pub mod params;
pub mod parser;
pub mod schema;
pub mod types;

pub use crate::error::{ParamError, ParamsError, ParseError};
pub use crate::params::{FieldValues, Locator, OperationParams, RuleLocator, RuleRef};
pub use crate::parser::{parse_field_values, parse_items, parse_str, DocumentFormat, Parsed};
pub use crate::schema::{node_schema, visible_fields, FieldSpec};
pub use crate::types::{HttpMethod, KeyKind, Operation, Resource};
