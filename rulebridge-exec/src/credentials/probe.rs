use std::collections::BTreeMap;

use rulebridge_core::HttpMethod;

use crate::credentials::{Credential, CredentialError};
use crate::executor::{ClientConfig, HttpClient, HttpRequestParts, RemoteApiError};

pub const HEALTH_CHECK_PATH: &str = "/health-check";

/// Issues `GET {host}/health-check` with the probe key, or unauthenticated when no key is
/// configured.
///
/// Any 2xx answer means the credential works. Transport failures and error statuses are
/// reported as [`CredentialError::Invalid`], never as a dispatch failure.
pub async fn verify_credential(
    client: &dyn HttpClient,
    credential: &Credential,
    config: &ClientConfig,
) -> Result<(), CredentialError> {
    let raw = format!("{}{HEALTH_CHECK_PATH}", credential.host());
    let url = url::Url::parse(&raw).map_err(|e| CredentialError::InvalidHost(format!("{raw}: {e}")))?;

    let mut headers = BTreeMap::new();
    if let Some(key) = credential.probe_key() {
        headers.insert("Authorization".to_string(), key.bearer());
    }
    let req = HttpRequestParts {
        method: HttpMethod::Get,
        url,
        headers,
        body: Vec::new(),
    };

    match client
        .send(req, config.timeout, config.max_response_bytes)
        .await
    {
        Ok(resp) if resp.is_success() => Ok(()),
        Ok(resp) => {
            let remote = RemoteApiError::from_response(&resp);
            Err(CredentialError::invalid(Some(resp.status), remote.message))
        }
        Err(e) => Err(CredentialError::invalid(None, e.to_string())),
    }
}
