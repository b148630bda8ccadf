use std::collections::BTreeMap;

pub const REDACTED: &str = "<redacted>";

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct RedactedHeaders {
    pub headers: BTreeMap<String, String>,
}

/// Copy of `headers` safe to log or print: credentials are replaced by [`REDACTED`].
pub fn redact_headers(headers: &BTreeMap<String, String>) -> RedactedHeaders {
    let mut out = headers.clone();
    for name in ["authorization", "cookie", "set-cookie"] {
        replace_case_insensitive(&mut out, name, REDACTED);
    }
    RedactedHeaders { headers: out }
}

fn replace_case_insensitive(map: &mut BTreeMap<String, String>, header: &str, replacement: &str) {
    let keys = map
        .keys()
        .filter(|k| k.eq_ignore_ascii_case(header))
        .cloned()
        .collect::<Vec<_>>();
    for k in keys {
        map.insert(k, replacement.to_string());
    }
}
