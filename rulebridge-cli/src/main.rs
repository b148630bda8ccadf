use clap::Parser;

mod args;
mod cmd;
mod commands;
mod exit_codes;
mod logging;
mod output;

pub use args::*;
use commands::Command;

#[derive(Debug, Parser)]
#[command(name = "rulebridge", version, about = "Rules service node runner")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose) {
        eprintln!("warning: {e}");
    }

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: failed to create tokio runtime: {e}");
            std::process::exit(exit_codes::RUNTIME_ERROR);
        }
    };

    let exit_code = rt.block_on(run_command(cli.command));
    std::process::exit(exit_code);
}

async fn run_command(command: Command) -> i32 {
    match command {
        Command::Run {
            operation,
            invocation,
            credentials,
            client,
            events,
            output,
        } => cmd::run::run_cmd(&operation, invocation, credentials, client, events, output).await,
        Command::Plan {
            operation,
            invocation,
            credentials,
            output,
        } => cmd::plan::plan_cmd(&operation, invocation, credentials, output),
        Command::Schema {
            resource,
            operation,
            output,
        } => cmd::schema::schema_cmd(resource.as_deref(), operation.as_deref(), output),
        Command::CheckCredentials {
            credentials,
            client,
            output,
        } => cmd::check_credentials::check_credentials_cmd(credentials, client, output).await,
    }
}
