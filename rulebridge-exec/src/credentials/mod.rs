mod credential;
mod error;
mod key;
mod probe;
mod redact;

pub use credential::{
    Credential, CredentialDocument, ENV_HOST, ENV_MANAGEMENT_API_KEY, ENV_SOLVER_API_KEY,
};
pub use error::CredentialError;
pub use key::ApiKey;
pub use probe::{verify_credential, HEALTH_CHECK_PATH};
pub use redact::{redact_headers, RedactedHeaders, REDACTED};
