use std::sync::Arc;

use rulebridge_exec::credentials::HEALTH_CHECK_PATH;
use rulebridge_exec::{CredentialError, Dispatcher, ReqwestHttpClient};
use serde::Serialize;

use super::config::{build_client_config, load_credential};
use crate::exit_codes;
use crate::output::{print_error, print_result, OutputFormat};
use crate::{ClientArgs, CredentialArgs, OutputArgs};

#[derive(Serialize)]
struct CheckResult {
    url: String,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

pub async fn check_credentials_cmd(
    credentials: CredentialArgs,
    client: ClientArgs,
    output: OutputArgs,
) -> i32 {
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
    let url = format!("{}{HEALTH_CHECK_PATH}", credential.host());
    let dispatcher = Dispatcher::new(Arc::new(http), Arc::new(credential))
        .with_config(build_client_config(&client));

    let (result, code) = match dispatcher.check_credential().await {
        Ok(()) => (
            CheckResult {
                url,
                ok: true,
                status: None,
                message: None,
            },
            exit_codes::SUCCESS,
        ),
        Err(CredentialError::Invalid { status, message }) => (
            CheckResult {
                url,
                ok: false,
                status,
                message: Some(message),
            },
            exit_codes::REMOTE_FAILED,
        ),
        Err(e) => {
            print_error(output.format, output.quiet, &e.to_string());
            return exit_codes::RUNTIME_ERROR;
        }
    };

    if output.format == OutputFormat::Text && !output.quiet {
        let icon = if result.ok { "✓" } else { "✗" };
        print!("  {icon} {}", result.url);
        if let Some(msg) = &result.message {
            print!(" - {msg}");
        }
        println!();
    } else {
        print_result(output.format, output.quiet, &result);
    }
    code
}
