mod cmd;
mod repo;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Repository maintenance tasks for basestart", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the local quality gate (check/test/fmt/clippy, then a release build).
    Preflight {
        /// Skip the release build at the end.
        #[arg(long, default_value_t = false)]
        quick: bool,
    },
}

fn main() {
    if let Err(err) = real_main() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Preflight { quick } => cmd::preflight::run(quick)?,
    }
    Ok(())
}
