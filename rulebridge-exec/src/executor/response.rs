use serde_json::Value as JsonValue;

/// One output item handed back to the host.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEnvelope {
    pub data: JsonValue,
    /// Index of the input item this output is paired with.
    pub source_index: usize,
}

/// Parses a response body. Empty bodies read as `null`, non-JSON bodies as a JSON string.
pub fn parse_body(body: &[u8]) -> JsonValue {
    if body.iter().all(u8::is_ascii_whitespace) {
        return JsonValue::Null;
    }
    match serde_json::from_slice(body) {
        Ok(v) => v,
        Err(_) => JsonValue::String(String::from_utf8_lossy(body).into_owned()),
    }
}

/// Wraps a response into envelopes.
///
/// An array yields one envelope per element in order, element `i` paired with input item `i`
/// (for solve and job start the service answers one element per item sent). Anything else
/// yields exactly one envelope paired with item 0.
pub fn normalize(body: JsonValue) -> Vec<ResultEnvelope> {
    match body {
        JsonValue::Array(elements) => elements
            .into_iter()
            .enumerate()
            .map(|(source_index, data)| ResultEnvelope { data, source_index })
            .collect(),
        data => vec![ResultEnvelope {
            data,
            source_index: 0,
        }],
    }
}
