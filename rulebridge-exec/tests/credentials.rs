use std::collections::BTreeMap;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rulebridge_core::KeyKind;
use rulebridge_exec::credentials::{
    redact_headers, verify_credential, ENV_HOST, ENV_MANAGEMENT_API_KEY, ENV_SOLVER_API_KEY,
    REDACTED,
};
use rulebridge_exec::executor::{HttpRequestParts, HttpResponseParts};
use rulebridge_exec::{ClientConfig, Credential, CredentialError, Dispatcher, HttpClient, HttpError};
use tokio::sync::Mutex;

struct MockHttpClient {
    requests: Arc<Mutex<Vec<HttpRequestParts>>>,
    response: Result<HttpResponseParts, HttpError>,
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn send(
        &self,
        req: HttpRequestParts,
        _timeout: Duration,
        _max_response_bytes: usize,
    ) -> Result<HttpResponseParts, HttpError> {
        self.requests.lock().await.push(req);
        self.response.clone()
    }
}

fn status(code: u16) -> Result<HttpResponseParts, HttpError> {
    Ok(HttpResponseParts {
        status: code,
        headers: BTreeMap::new(),
        body: Vec::new(),
    })
}

#[test]
fn loads_from_environment_lookup() {
    let env: BTreeMap<&str, &str> = [
        (ENV_HOST, "https://rules.example.com/"),
        (ENV_SOLVER_API_KEY, "s-key"),
        (ENV_MANAGEMENT_API_KEY, "  "),
    ]
    .into_iter()
    .collect();
    let cred = Credential::from_lookup(|name| env.get(name).map(|v| v.to_string())).unwrap();
    assert_eq!(cred.host(), "https://rules.example.com");
    assert_eq!(cred.bearer(KeyKind::Solver).unwrap(), "Bearer s-key");
    assert!(matches!(
        cred.bearer(KeyKind::Management),
        Err(CredentialError::MissingKey(KeyKind::Management))
    ));
}

#[test]
fn loads_yaml_credential_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "host: https://rules.example.com\nsolverApiKey: s-key\nmanagementApiKey: m-key"
    )
    .unwrap();
    let cred = Credential::from_file(file.path()).unwrap();
    assert_eq!(cred.bearer(KeyKind::Management).unwrap(), "Bearer m-key");
}

#[test]
fn rejects_missing_or_malformed_host() {
    assert!(matches!(
        Credential::from_str_document(r#"{"solverApiKey": "k"}"#),
        Err(CredentialError::MissingHost)
    ));
    assert!(matches!(
        Credential::new("not a url"),
        Err(CredentialError::InvalidHost(_))
    ));
    assert!(matches!(
        Credential::from_file(std::path::Path::new("/nonexistent/credentials.yaml")),
        Err(CredentialError::Load(_))
    ));
}

#[test]
fn debug_output_never_contains_keys() {
    let cred = Credential::new("https://rules.example.com")
        .unwrap()
        .with_solver_key("top-secret");
    let printed = format!("{cred:?}");
    assert!(!printed.contains("top-secret"));
    assert!(printed.contains("<redacted>"));
}

#[test]
fn redacts_authorization_headers_case_insensitively() {
    let mut headers = BTreeMap::new();
    headers.insert("authorization".to_string(), "Bearer k".to_string());
    headers.insert("Cookie".to_string(), "session=1".to_string());
    headers.insert("Accept".to_string(), "application/json".to_string());
    let redacted = redact_headers(&headers);
    assert_eq!(redacted.headers["authorization"], REDACTED);
    assert_eq!(redacted.headers["Cookie"], REDACTED);
    assert_eq!(redacted.headers["Accept"], "application/json");
}

#[tokio::test]
async fn health_check_uses_solver_key() {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let client = MockHttpClient {
        requests: requests.clone(),
        response: status(204),
    };
    let cred = Credential::new("https://rules.example.com/")
        .unwrap()
        .with_solver_key("s-key")
        .with_management_key("m-key");

    verify_credential(&client, &cred, &ClientConfig::default())
        .await
        .unwrap();

    let reqs = requests.lock().await;
    assert_eq!(reqs[0].url.as_str(), "https://rules.example.com/health-check");
    assert_eq!(reqs[0].headers["Authorization"], "Bearer s-key");
}

#[tokio::test]
async fn health_check_falls_back_to_management_key() {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let client = MockHttpClient {
        requests: requests.clone(),
        response: status(200),
    };
    let cred = Credential::new("https://rules.example.com")
        .unwrap()
        .with_management_key("m-key");
    verify_credential(&client, &cred, &ClientConfig::default())
        .await
        .unwrap();
    assert_eq!(requests.lock().await[0].headers["Authorization"], "Bearer m-key");
}

#[tokio::test]
async fn host_only_credential_still_contacts_health_check() {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let client = MockHttpClient {
        requests: requests.clone(),
        response: status(200),
    };
    let cred = Credential::new("https://rules.example.com").unwrap();
    verify_credential(&client, &cred, &ClientConfig::default())
        .await
        .unwrap();

    let reqs = requests.lock().await;
    assert_eq!(reqs.len(), 1);
    assert_eq!(reqs[0].url.as_str(), "https://rules.example.com/health-check");
    assert!(!reqs[0].headers.contains_key("Authorization"));
}

#[tokio::test]
async fn health_check_error_status_is_credential_invalid() {
    let client = MockHttpClient {
        requests: Arc::new(Mutex::new(Vec::new())),
        response: status(401),
    };
    let cred = Credential::new("https://rules.example.com")
        .unwrap()
        .with_solver_key("bad");
    let err = verify_credential(&client, &cred, &ClientConfig::default())
        .await
        .unwrap_err();
    assert!(matches!(err, CredentialError::Invalid { status: Some(401), .. }));
}

#[tokio::test]
async fn health_check_transport_failure_is_credential_invalid() {
    let http = Arc::new(MockHttpClient {
        requests: Arc::new(Mutex::new(Vec::new())),
        response: Err(HttpError::Network("connection refused".into())),
    });
    let cred = Credential::new("https://rules.example.com")
        .unwrap()
        .with_solver_key("k");
    let d = Dispatcher::new(http, Arc::new(cred));
    let err = d.check_credential().await.unwrap_err();
    let CredentialError::Invalid { status, message } = err else {
        panic!("expected invalid credential");
    };
    assert_eq!(status, None);
    assert!(message.contains("connection refused"));
}
