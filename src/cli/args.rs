//! CLI argument definitions and `LaunchProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::{connection::ConnectionRequest, settings::Settings};

use super::{LaunchProfile, ProfileOverrides};

/// Parsed command intent from CLI.
#[derive(Debug, Clone)]
pub enum ParsedCommand {
    /// Launch the given connection string.
    Launch {
        profile: LaunchProfile,
        request: ConnectionRequest,
    },
    /// No connection string was given; ask for one.
    Interactive {
        profile: LaunchProfile,
        designer: bool,
    },
    Cli {
        profile: LaunchProfile,
        command: CliCommand,
    },
}

/// Top-level optional CLI commands.
#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Inspect or edit the launch history.
    #[command(about = "Inspect or edit the launch history")]
    History(HistoryArgs),
}

/// `history` command container.
#[derive(Debug, Clone, Args)]
#[command(
    about = "Inspect or edit the launch history",
    long_about = "Inspect or edit the launch history.\n\nSubcommands:\n  list    Print recorded connection strings, newest first.\n  clear   Delete every entry.\n  remove  Delete one connection string."
)]
pub struct HistoryArgs {
    #[command(subcommand)]
    pub command: HistoryCommand,
}

/// History management subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum HistoryCommand {
    /// Print recorded connection strings, newest first.
    List,
    /// Delete every recorded connection string.
    Clear,
    /// Delete one recorded connection string.
    Remove(HistoryRemoveArgs),
}

/// Arguments for `history remove`.
#[derive(Debug, Clone, Args)]
pub struct HistoryRemoveArgs {
    /// Connection string exactly as listed by `history list`.
    pub connection: String,
}

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "basestart",
    author,
    version,
    about = "Launch 1C:Enterprise information bases from a connection string",
    long_about = None,
    args_conflicts_with_subcommands = true,
    after_help = "Connection string forms:\n  host;base\n  Srvr=\"host\";Ref=\"base\";\n  File=\"path\";\n  ws=\"url\";"
)]
pub struct LaunchArgs {
    /// Connection string; omit it to pick one from history.
    #[arg(value_name = "CONNECTION")]
    pub connection: Option<String>,
    /// Launch in designer mode.
    #[arg(short, long, default_value_t = false)]
    pub designer: bool,
    /// Path to 1cestart.exe (overrides the settings file).
    #[arg(long = "starter", value_name = "PATH")]
    pub starter_override: Option<PathBuf>,
    /// Path to the settings file (defaults to ./basestart.toml when present).
    #[arg(long = "config", value_name = "PATH")]
    pub config_override: Option<PathBuf>,
    /// Return as soon as the starter is spawned.
    #[arg(long, default_value_t = false)]
    pub no_wait: bool,
    /// Print the launch command as JSON without starting anything.
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
    /// Do not record the connection string in history.
    #[arg(long, default_value_t = false)]
    pub no_history: bool,
    /// Optional CLI command mode.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl LaunchArgs {
    /// Build a `LaunchProfile` from CLI args and the settings file.
    pub fn build(&self) -> Result<LaunchProfile> {
        let settings = Settings::load(self.config_override.clone())?;
        Ok(LaunchProfile::resolve(self.overrides(), settings))
    }

    /// Parse CLI args into launch, interactive, or utility command mode.
    pub fn into_command(self) -> Result<ParsedCommand> {
        let profile = self.build()?;
        let parsed = match (self.command, self.connection) {
            (Some(command), _) => ParsedCommand::Cli { profile, command },
            (None, Some(raw)) => ParsedCommand::Launch {
                profile,
                request: ConnectionRequest::new(raw, self.designer),
            },
            (None, None) => ParsedCommand::Interactive {
                profile,
                designer: self.designer,
            },
        };
        Ok(parsed)
    }

    fn overrides(&self) -> ProfileOverrides {
        ProfileOverrides {
            starter: self.starter_override.clone(),
            no_wait: self.no_wait,
            dry_run: self.dry_run,
            no_history: self.no_history,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parse(args: &[&str]) -> LaunchArgs {
        LaunchArgs::try_parse_from(std::iter::once("basestart").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn cli_definition_is_consistent() {
        LaunchArgs::command().debug_assert();
    }

    #[test]
    fn designer_flag_has_short_and_long_form() {
        assert!(parse(&["-d", "srv;base"]).designer);
        assert!(parse(&["--designer", "srv;base"]).designer);
        assert!(!parse(&["srv;base"]).designer);
    }

    #[test]
    fn connection_string_with_quotes_is_one_positional() {
        let args = parse(&[r#"Srvr="s";Ref="b";"#]);
        assert_eq!(args.connection.as_deref(), Some(r#"Srvr="s";Ref="b";"#));
        assert!(args.command.is_none());
    }

    #[test]
    fn history_subcommand_parses() {
        let args = parse(&["history", "remove", "srv;base"]);
        match args.command {
            Some(CliCommand::History(HistoryArgs {
                command: HistoryCommand::Remove(remove),
            })) => assert_eq!(remove.connection, "srv;base"),
            other => panic!("Unexpected command: {other:?}"),
        }
    }
}
