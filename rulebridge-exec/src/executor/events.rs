use async_trait::async_trait;
use rulebridge_core::{HttpMethod, Operation};
use serde_json::json;
use uuid::Uuid;

use crate::credentials::RedactedHeaders;

#[derive(Debug, Clone)]
pub enum Event {
    InvocationStarted {
        invocation_id: Uuid,
        operation: Operation,
        item_count: usize,
    },
    RequestPrepared {
        invocation_id: Uuid,
        method: HttpMethod,
        url: String,
        headers: RedactedHeaders,
    },
    InvocationSucceeded {
        invocation_id: Uuid,
        status: u16,
        envelopes: usize,
    },
    InvocationFailed {
        invocation_id: Uuid,
        status: Option<u16>,
        message: String,
    },
    CredentialChecked {
        host: String,
        ok: bool,
    },
}

impl Event {
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::InvocationStarted { .. } => "invocation.started",
            Event::RequestPrepared { .. } => "request.prepared",
            Event::InvocationSucceeded { .. } => "invocation.succeeded",
            Event::InvocationFailed { .. } => "invocation.failed",
            Event::CredentialChecked { .. } => "credential.checked",
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        let payload = match self {
            Event::InvocationStarted {
                invocation_id,
                operation,
                item_count,
            } => json!({
                "invocation_id": invocation_id.to_string(),
                "operation": operation.as_str(),
                "item_count": item_count,
            }),
            Event::RequestPrepared {
                invocation_id,
                method,
                url,
                headers,
            } => json!({
                "invocation_id": invocation_id.to_string(),
                "method": method.as_str(),
                "url": url,
                "headers": headers,
            }),
            Event::InvocationSucceeded {
                invocation_id,
                status,
                envelopes,
            } => json!({
                "invocation_id": invocation_id.to_string(),
                "status": status,
                "envelopes": envelopes,
            }),
            Event::InvocationFailed {
                invocation_id,
                status,
                message,
            } => json!({
                "invocation_id": invocation_id.to_string(),
                "status": status,
                "message": message,
            }),
            Event::CredentialChecked { host, ok } => json!({ "host": host, "ok": ok }),
        };
        json!({ "type": self.event_type(), "payload": payload })
    }
}

#[async_trait]
pub trait EventSink: Send + Sync {
    async fn emit(&self, event: Event);
}

pub struct NoOpEventSink;

#[async_trait]
impl EventSink for NoOpEventSink {
    async fn emit(&self, _event: Event) {}
}

/// Writes one JSON line per event to stdout.
pub struct StdoutEventSink;

#[async_trait]
impl EventSink for StdoutEventSink {
    async fn emit(&self, event: Event) {
        println!("{}", event.to_json());
    }
}

pub struct CompositeEventSink {
    sinks: Vec<Box<dyn EventSink>>,
}

impl Default for CompositeEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl CompositeEventSink {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn add(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }
}

#[async_trait]
impl EventSink for CompositeEventSink {
    async fn emit(&self, event: Event) {
        for sink in &self.sinks {
            sink.emit(event.clone()).await;
        }
    }
}
