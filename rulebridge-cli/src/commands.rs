use clap::Subcommand;

use crate::args::*;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run one operation and print its result envelopes.
    Run {
        operation: String,
        #[command(flatten)]
        invocation: InvocationArgs,
        #[command(flatten)]
        credentials: CredentialArgs,
        #[command(flatten)]
        client: ClientArgs,
        /// Also print lifecycle events as JSON lines.
        #[arg(long)]
        events: bool,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Build the request of an operation without sending it.
    Plan {
        operation: String,
        #[command(flatten)]
        invocation: InvocationArgs,
        #[command(flatten)]
        credentials: CredentialArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// List resources, their operations, or the fields of one operation.
    Schema {
        #[arg(long)]
        resource: Option<String>,
        #[arg(long)]
        operation: Option<String>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Probe the configured host's health check with the stored key.
    CheckCredentials {
        #[command(flatten)]
        credentials: CredentialArgs,
        #[command(flatten)]
        client: ClientArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
}
