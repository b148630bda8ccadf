use rulebridge_core::{KeyKind, ParamsError};
use serde_json::Value as JsonValue;

use crate::compile::CompileError;
use crate::executor::http::{HttpError, HttpResponseParts};
use crate::executor::response::parse_body;

/// Failure of the single remote call behind an invocation. Never retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", self.describe())]
pub struct RemoteApiError {
    /// `None` when the request never produced a response (DNS, timeout, reset).
    pub status: Option<u16>,
    pub body: Option<JsonValue>,
    pub message: String,
}

impl RemoteApiError {
    pub fn from_response(resp: &HttpResponseParts) -> Self {
        let body = parse_body(&resp.body);
        let message = match &body {
            JsonValue::Object(map) => match map.get("message") {
                Some(JsonValue::String(m)) => m.clone(),
                _ => body.to_string(),
            },
            JsonValue::String(s) => s.clone(),
            JsonValue::Null => format!("HTTP {}", resp.status),
            other => other.to_string(),
        };
        Self {
            status: Some(resp.status),
            body: (!body.is_null()).then_some(body),
            message,
        }
    }

    pub fn from_transport(err: &HttpError) -> Self {
        Self {
            status: None,
            body: None,
            message: err.to_string(),
        }
    }

    fn describe(&self) -> String {
        match self.status {
            Some(status) => format!("remote API error (HTTP {status}): {}", self.message),
            None => format!("remote API unreachable: {}", self.message),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Params(#[from] ParamsError),
    #[error(transparent)]
    Compile(#[from] CompileError),
    #[error("no {0} configured for this operation")]
    MissingApiKey(KeyKind),
    #[error(transparent)]
    Remote(#[from] RemoteApiError),
}

impl DispatchError {
    pub fn remote(&self) -> Option<&RemoteApiError> {
        match self {
            DispatchError::Remote(e) => Some(e),
            _ => None,
        }
    }
}
