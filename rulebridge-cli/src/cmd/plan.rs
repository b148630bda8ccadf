use std::sync::Arc;

use rulebridge_core::{HttpMethod, KeyKind, Operation};
use rulebridge_exec::credentials::{redact_headers, RedactedHeaders};
use rulebridge_exec::executor::parse_body;
use rulebridge_exec::{Dispatcher, ReqwestHttpClient};
use serde::Serialize;
use serde_json::Value as JsonValue;

use super::config::{load_credential, load_fields, load_items, resolve_params};
use super::run::exit_code_for;
use crate::exit_codes;
use crate::output::{print_error, print_result, OutputFormat};
use crate::{CredentialArgs, InvocationArgs, OutputArgs};

#[derive(Serialize)]
struct PlannedRequest {
    operation: Operation,
    method: HttpMethod,
    url: String,
    key: KeyKind,
    headers: RedactedHeaders,
    body: JsonValue,
}

pub fn plan_cmd(
    operation: &str,
    invocation: InvocationArgs,
    credentials: CredentialArgs,
    output: OutputArgs,
) -> i32 {
    let fields = match load_fields(&invocation, &output) {
        Ok(f) => f,
        Err(code) => return code,
    };
    let params = match resolve_params(operation, &invocation, &fields, &output) {
        Ok(p) => p,
        Err(code) => return code,
    };
    let items = match load_items(&invocation, &output) {
        Ok(i) => i,
        Err(code) => return code,
    };
    let credential = match load_credential(&credentials, &output) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let http = match ReqwestHttpClient::new() {
        Ok(h) => h,
        Err(e) => {
            print_error(output.format, output.quiet, &e.to_string());
            return exit_codes::RUNTIME_ERROR;
        }
    };
    let dispatcher = Dispatcher::new(Arc::new(http), Arc::new(credential));

    let req = match dispatcher.prepare(&params, &items) {
        Ok(r) => r,
        Err(e) => {
            print_error(output.format, output.quiet, &e.to_string());
            return exit_code_for(&e);
        }
    };
    let operation = params.operation();
    let planned = PlannedRequest {
        operation,
        method: req.method,
        url: req.url.to_string(),
        key: operation.key_kind(),
        headers: redact_headers(&req.headers),
        body: parse_body(&req.body),
    };

    if output.format == OutputFormat::Text && !output.quiet {
        println!("{} {}", planned.method, planned.url);
        for (name, value) in &planned.headers.headers {
            println!("{name}: {value}");
        }
        if !planned.body.is_null() {
            println!();
            if let Ok(body) = serde_json::to_string_pretty(&planned.body) {
                println!("{body}");
            }
        }
    } else {
        print_result(output.format, output.quiet, &planned);
    }
    exit_codes::SUCCESS
}
