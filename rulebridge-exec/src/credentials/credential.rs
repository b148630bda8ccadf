use std::path::Path;

use rulebridge_core::{parse_str, DocumentFormat, KeyKind};

use crate::credentials::{ApiKey, CredentialError};

pub const ENV_HOST: &str = "RULEBRIDGE_HOST";
pub const ENV_SOLVER_API_KEY: &str = "RULEBRIDGE_SOLVER_API_KEY";
pub const ENV_MANAGEMENT_API_KEY: &str = "RULEBRIDGE_MANAGEMENT_API_KEY";

/// Stored connection secrets as they appear in a credential file.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialDocument {
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub solver_api_key: Option<String>,
    #[serde(default)]
    pub management_api_key: Option<String>,
}

/// Connection secrets for the rules service. Read-only for the lifetime of an invocation.
#[derive(Debug)]
pub struct Credential {
    host: String,
    solver_api_key: Option<ApiKey>,
    management_api_key: Option<ApiKey>,
}

impl Credential {
    pub fn new(host: impl Into<String>) -> Result<Self, CredentialError> {
        let host = host.into();
        let host = host.trim();
        if host.is_empty() {
            return Err(CredentialError::MissingHost);
        }
        url::Url::parse(host).map_err(|e| CredentialError::InvalidHost(format!("{host}: {e}")))?;
        let host = host.strip_suffix('/').unwrap_or(host).to_string();
        Ok(Self {
            host,
            solver_api_key: None,
            management_api_key: None,
        })
    }

    pub fn with_solver_key(mut self, key: impl Into<String>) -> Self {
        self.solver_api_key = ApiKey::new(key);
        self
    }

    pub fn with_management_key(mut self, key: impl Into<String>) -> Self {
        self.management_api_key = ApiKey::new(key);
        self
    }

    pub fn from_document(doc: CredentialDocument) -> Result<Self, CredentialError> {
        let mut cred = Self::new(doc.host)?;
        cred.solver_api_key = doc.solver_api_key.and_then(ApiKey::new);
        cred.management_api_key = doc.management_api_key.and_then(ApiKey::new);
        Ok(cred)
    }

    /// Reads a JSON or YAML credential document.
    pub fn from_str_document(input: &str) -> Result<Self, CredentialError> {
        let parsed = parse_str::<CredentialDocument>(input, DocumentFormat::Auto)
            .map_err(|e| CredentialError::Load(e.to_string()))?;
        Self::from_document(parsed.value)
    }

    pub fn from_file(path: &Path) -> Result<Self, CredentialError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CredentialError::Load(format!("{}: {e}", path.display())))?;
        Self::from_str_document(&content)
    }

    pub fn from_env() -> Result<Self, CredentialError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a credential from `RULEBRIDGE_*` variables resolved through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CredentialError> {
        Self::from_document(CredentialDocument {
            host: lookup(ENV_HOST).unwrap_or_default(),
            solver_api_key: lookup(ENV_SOLVER_API_KEY),
            management_api_key: lookup(ENV_MANAGEMENT_API_KEY),
        })
    }

    /// Base host with any trailing slash removed.
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn key(&self, kind: KeyKind) -> Option<&ApiKey> {
        match kind {
            KeyKind::Solver => self.solver_api_key.as_ref(),
            KeyKind::Management => self.management_api_key.as_ref(),
        }
    }

    /// `Authorization` header value for requests authenticated with `kind`.
    pub fn bearer(&self, kind: KeyKind) -> Result<String, CredentialError> {
        self.key(kind)
            .map(ApiKey::bearer)
            .ok_or(CredentialError::MissingKey(kind))
    }

    /// Key used by the connectivity probe: the solver key, else the management key.
    pub fn probe_key(&self) -> Option<&ApiKey> {
        self.solver_api_key
            .as_ref()
            .or(self.management_api_key.as_ref())
    }
}
