use std::path::Path;
use std::time::Duration;

use rulebridge_core::{
    parse_field_values, parse_items, FieldValues, Operation, OperationParams, Resource,
};
use rulebridge_exec::{ClientConfig, Credential};
use serde_json::Value as JsonValue;

use crate::exit_codes;
use crate::output::print_error;
use crate::{ClientArgs, CredentialArgs, InvocationArgs, OutputArgs};

fn read_file(path: &Path, what: &str, output: &OutputArgs) -> Result<String, i32> {
    std::fs::read_to_string(path).map_err(|e| {
        print_error(
            output.format,
            output.quiet,
            &format!("failed to read {what} {}: {e}", path.display()),
        );
        exit_codes::RUNTIME_ERROR
    })
}

pub fn load_fields(invocation: &InvocationArgs, output: &OutputArgs) -> Result<FieldValues, i32> {
    let mut fields = match &invocation.fields {
        None => FieldValues::new(),
        Some(path) => {
            let content = read_file(path, "fields", output)?;
            parse_field_values(&content).map_err(|e| {
                print_error(output.format, output.quiet, &format!("invalid fields file: {e}"));
                exit_codes::VALIDATION_FAILED
            })?
        }
    };
    merge_set_fields(&mut fields, &invocation.set_fields);
    Ok(fields)
}

/// Applies `KEY=VALUE` overrides. Values that look like a JSON object or array are parsed;
/// everything else is kept as a string.
pub fn merge_set_fields(fields: &mut FieldValues, set_fields: &[String]) {
    for s in set_fields {
        if let Some((k, v)) = s.split_once('=') {
            let trimmed = v.trim_start();
            let value = if trimmed.starts_with('{') || trimmed.starts_with('[') {
                serde_json::from_str(v).unwrap_or_else(|_| JsonValue::String(v.to_string()))
            } else {
                JsonValue::String(v.to_string())
            };
            fields.insert(k, value);
        }
    }
}

pub fn load_items(invocation: &InvocationArgs, output: &OutputArgs) -> Result<Vec<JsonValue>, i32> {
    let Some(path) = &invocation.items else {
        return Ok(vec![serde_json::json!({})]);
    };
    let content = read_file(path, "items", output)?;
    parse_items(&content).map_err(|e| {
        print_error(output.format, output.quiet, &format!("invalid items file: {e}"));
        exit_codes::VALIDATION_FAILED
    })
}

pub fn load_credential(credentials: &CredentialArgs, output: &OutputArgs) -> Result<Credential, i32> {
    let loaded = match &credentials.credentials {
        Some(path) => Credential::from_file(path),
        None => Credential::from_env(),
    };
    loaded.map_err(|e| {
        print_error(output.format, output.quiet, &e.to_string());
        exit_codes::RUNTIME_ERROR
    })
}

/// Parses the operation, checks it against `--resource` and reads its parameters.
pub fn resolve_params(
    operation: &str,
    invocation: &InvocationArgs,
    fields: &FieldValues,
    output: &OutputArgs,
) -> Result<OperationParams, i32> {
    let fail = |message: String| {
        print_error(output.format, output.quiet, &message);
        exit_codes::VALIDATION_FAILED
    };
    let operation: Operation = operation.parse().map_err(|e| fail(format!("{e}")))?;
    let resource = match &invocation.resource {
        Some(r) => r.parse::<Resource>().map_err(|e| fail(format!("{e}")))?,
        None => operation.resource(),
    };
    OperationParams::resolve(resource, operation, fields).map_err(|e| {
        let details = e
            .violations
            .iter()
            .map(|v| format!("  - {v}"))
            .collect::<Vec<_>>()
            .join("\n");
        fail(format!("{e}\n{details}"))
    })
}

pub fn build_client_config(client: &ClientArgs) -> ClientConfig {
    ClientConfig {
        timeout: Duration::from_millis(client.timeout),
        max_response_bytes: client.max_response_bytes,
    }
}
