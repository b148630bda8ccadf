use std::sync::Arc;

use rulebridge_exec::executor::{EventSink, NoOpEventSink, StdoutEventSink};
use rulebridge_exec::{CompileError, DispatchError, Dispatcher, ReqwestHttpClient};

use super::config::{build_client_config, load_credential, load_fields, load_items, resolve_params};
use crate::exit_codes;
use crate::output::{print_error, print_result};
use crate::{ClientArgs, CredentialArgs, InvocationArgs, OutputArgs};

pub async fn run_cmd(
    operation: &str,
    invocation: InvocationArgs,
    credentials: CredentialArgs,
    client: ClientArgs,
    events: bool,
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

    let event_sink: Arc<dyn EventSink> = if events {
        Arc::new(StdoutEventSink)
    } else {
        Arc::new(NoOpEventSink)
    };
    let dispatcher = Dispatcher::new(Arc::new(http), Arc::new(credential))
        .with_config(build_client_config(&client))
        .with_events(event_sink);

    match dispatcher.run_params(&params, &items).await {
        Ok(envelopes) => {
            print_result(output.format, output.quiet, &envelopes);
            exit_codes::SUCCESS
        }
        Err(e) => {
            print_error(output.format, output.quiet, &e.to_string());
            exit_code_for(&e)
        }
    }
}

pub fn exit_code_for(err: &DispatchError) -> i32 {
    match err {
        DispatchError::Params(_) | DispatchError::Compile(CompileError::MissingInputItem(_)) => {
            exit_codes::VALIDATION_FAILED
        }
        DispatchError::Remote(_) => exit_codes::REMOTE_FAILED,
        DispatchError::MissingApiKey(_) | DispatchError::Compile(_) => exit_codes::RUNTIME_ERROR,
    }
}
