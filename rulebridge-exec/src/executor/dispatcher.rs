use std::collections::BTreeMap;
use std::sync::Arc;

use rulebridge_core::{FieldValues, Operation, OperationParams};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::compile::{compile_request, CompileError, RequestTemplate};
use crate::credentials::{redact_headers, verify_credential, Credential, CredentialError};
use crate::executor::config::ClientConfig;
use crate::executor::error::{DispatchError, RemoteApiError};
use crate::executor::events::{Event, EventSink, NoOpEventSink};
use crate::executor::http::{HttpClient, HttpRequestParts};
use crate::executor::response::{normalize, parse_body, ResultEnvelope};

/// Runs one invocation: typed parameters in, exactly one HTTP request out, parsed body back.
///
/// Holds no per-invocation state; the same dispatcher can serve concurrent invocations.
pub struct Dispatcher {
    http: Arc<dyn HttpClient>,
    credential: Arc<Credential>,
    config: ClientConfig,
    event_sink: Arc<dyn EventSink>,
}

impl Dispatcher {
    pub fn new(http: Arc<dyn HttpClient>, credential: Arc<Credential>) -> Self {
        Self {
            http,
            credential,
            config: ClientConfig::default(),
            event_sink: Arc::new(NoOpEventSink),
        }
    }

    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_events(mut self, event_sink: Arc<dyn EventSink>) -> Self {
        self.event_sink = event_sink;
        self
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Compiles the request for `params` without sending it.
    pub fn template(
        &self,
        params: &OperationParams,
        items: &[JsonValue],
    ) -> Result<RequestTemplate, CompileError> {
        compile_request(params, self.credential.host(), items)
    }

    /// Builds the wire request, bearer header included. Fails with
    /// [`DispatchError::MissingApiKey`] when the credential lacks the operation's key.
    pub fn prepare(
        &self,
        params: &OperationParams,
        items: &[JsonValue],
    ) -> Result<HttpRequestParts, DispatchError> {
        let template = self.template(params, items)?;
        let bearer = self
            .credential
            .bearer(template.key)
            .map_err(|_| DispatchError::MissingApiKey(template.key))?;

        let mut headers = BTreeMap::new();
        headers.insert("Authorization".to_string(), bearer);
        headers.insert("Accept".to_string(), "application/json".to_string());
        let body = match &template.body {
            Some(body) => {
                headers.insert("Content-Type".to_string(), "application/json".to_string());
                serde_json::to_vec(body).map_err(|e| CompileError::Serialize(e.to_string()))?
            }
            None => Vec::new(),
        };

        Ok(HttpRequestParts {
            method: template.method,
            url: template.url,
            headers,
            body,
        })
    }

    /// Reads `fields` for `operation` and issues its request. Returns the parsed body.
    pub async fn dispatch(
        &self,
        operation: Operation,
        fields: &FieldValues,
        items: &[JsonValue],
    ) -> Result<JsonValue, DispatchError> {
        let params = OperationParams::from_fields(operation, fields)?;
        self.dispatch_params(&params, items).await
    }

    pub async fn dispatch_params(
        &self,
        params: &OperationParams,
        items: &[JsonValue],
    ) -> Result<JsonValue, DispatchError> {
        let invocation_id = Uuid::new_v4();
        let operation = params.operation();
        self.event_sink
            .emit(Event::InvocationStarted {
                invocation_id,
                operation,
                item_count: items.len(),
            })
            .await;

        let req = match self.prepare(params, items) {
            Ok(req) => req,
            Err(e) => {
                self.emit_failed(invocation_id, None, e.to_string()).await;
                return Err(e);
            }
        };
        tracing::debug!(%invocation_id, %operation, method = %req.method, url = %req.url, "request compiled");
        self.event_sink
            .emit(Event::RequestPrepared {
                invocation_id,
                method: req.method,
                url: req.url.to_string(),
                headers: redact_headers(&req.headers),
            })
            .await;

        let resp = match self
            .http
            .send(req, self.config.timeout, self.config.max_response_bytes)
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                let err = RemoteApiError::from_transport(&e);
                self.emit_failed(invocation_id, None, err.message.clone()).await;
                return Err(err.into());
            }
        };

        if !resp.is_success() {
            let err = RemoteApiError::from_response(&resp);
            self.emit_failed(invocation_id, err.status, err.message.clone())
                .await;
            return Err(err.into());
        }

        let body = parse_body(&resp.body);
        let envelopes = match &body {
            JsonValue::Array(a) => a.len(),
            _ => 1,
        };
        tracing::info!(%invocation_id, %operation, status = resp.status, envelopes, "invocation succeeded");
        self.event_sink
            .emit(Event::InvocationSucceeded {
                invocation_id,
                status: resp.status,
                envelopes,
            })
            .await;
        Ok(body)
    }

    /// [`dispatch`](Self::dispatch) followed by normalization into result envelopes.
    pub async fn run(
        &self,
        operation: Operation,
        fields: &FieldValues,
        items: &[JsonValue],
    ) -> Result<Vec<ResultEnvelope>, DispatchError> {
        self.dispatch(operation, fields, items).await.map(normalize)
    }

    pub async fn run_params(
        &self,
        params: &OperationParams,
        items: &[JsonValue],
    ) -> Result<Vec<ResultEnvelope>, DispatchError> {
        self.dispatch_params(params, items).await.map(normalize)
    }

    /// Runs the health-check probe against the configured host.
    pub async fn check_credential(&self) -> Result<(), CredentialError> {
        let result = verify_credential(self.http.as_ref(), &self.credential, &self.config).await;
        self.event_sink
            .emit(Event::CredentialChecked {
                host: self.credential.host().to_string(),
                ok: result.is_ok(),
            })
            .await;
        result
    }

    async fn emit_failed(&self, invocation_id: Uuid, status: Option<u16>, message: String) {
        tracing::warn!(%invocation_id, ?status, %message, "invocation failed");
        self.event_sink
            .emit(Event::InvocationFailed {
                invocation_id,
                status,
                message,
            })
            .await;
    }
}
