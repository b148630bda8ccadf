use std::path::PathBuf;

use clap::Args;

use crate::output::OutputFormat;

#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// Field values and input items of one invocation.
#[derive(Debug, Args, Clone)]
pub struct InvocationArgs {
    /// Resource the operation is selected under; defaults to the operation's own.
    #[arg(long)]
    pub resource: Option<String>,
    /// JSON or YAML object of field values.
    #[arg(long)]
    pub fields: Option<PathBuf>,
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set_fields: Vec<String>,
    /// JSON or YAML input items; a single `{}` item when omitted.
    #[arg(long)]
    pub items: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct CredentialArgs {
    /// JSON or YAML credential file. Falls back to RULEBRIDGE_* environment variables.
    #[arg(long)]
    pub credentials: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct ClientArgs {
    /// Request timeout in milliseconds.
    #[arg(long, default_value_t = 30000)]
    pub timeout: u64,
    #[arg(long, default_value_t = 4_194_304)]
    pub max_response_bytes: usize,
}
