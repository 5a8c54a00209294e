//! Entry point for basestart.
use std::process::ExitCode;

use basestart::{
    cli::{execute_cli_command, CliCommand, LaunchArgs, LaunchProfile, ParsedCommand},
    lib::telemetry,
    runtime::{self, RuntimeExit},
};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(code) => code,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<ExitCode, RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let args = LaunchArgs::parse();
    let command = args.into_command().map_err(RuntimeExit::from_error)?;

    match command {
        ParsedCommand::Launch { profile, request } => runtime::run_launch(&profile, request).await,
        ParsedCommand::Interactive { profile, designer } => {
            runtime::run_interactive(&profile, designer).await
        }
        ParsedCommand::Cli { profile, command } => handle_cli_command(command, &profile),
    }
}

fn handle_cli_command(
    command: CliCommand,
    profile: &LaunchProfile,
) -> Result<ExitCode, RuntimeExit> {
    let message = execute_cli_command(command, profile).map_err(RuntimeExit::from_error)?;
    println!("{message}");
    Ok(ExitCode::SUCCESS)
}
