use secrecy::{ExposeSecret, SecretString};

/// An API key. Never `Debug`/`Display` printable; the bytes are zeroized on drop.
pub struct ApiKey(SecretString);

impl ApiKey {
    /// `None` for blank input, so an empty configured key reads as "not configured".
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        let trimmed = key.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(SecretString::from(trimmed.to_string())))
    }

    /// `Authorization` header value.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0.expose_secret())
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}
