use rulebridge_core::KeyKind;

#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    /// The health-check probe failed or answered with an error status.
    #[error("credential invalid: {message}")]
    Invalid {
        status: Option<u16>,
        message: String,
    },
    #[error("credential host is not configured")]
    MissingHost,
    #[error("credential host is not a valid URL: {0}")]
    InvalidHost(String),
    #[error("no {0} configured")]
    MissingKey(KeyKind),
    #[error("failed to load credential: {0}")]
    Load(String),
}

impl CredentialError {
    pub fn invalid(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Invalid {
            status,
            message: message.into(),
        }
    }
}
