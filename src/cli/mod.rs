//! CLI entrypoint module structure.
use anyhow::Result;
use serde_json::json;

use crate::history::History;

pub mod args;
pub mod interactive;
pub mod profile;

pub use args::{
    CliCommand, HistoryArgs, HistoryCommand, HistoryRemoveArgs, LaunchArgs, ParsedCommand,
};
pub use interactive::{ConnectionPrompt, PromptAction};
pub use profile::{LaunchProfile, ProfileOverrides};

/// Execute CLI command mode and return a user-facing result payload.
pub fn execute_cli_command(command: CliCommand, profile: &LaunchProfile) -> Result<String> {
    match command {
        CliCommand::History(history) => {
            let store = profile.load_history()?;
            match history.command {
                HistoryCommand::List => list_history(&store),
                HistoryCommand::Clear => clear_history(store),
                HistoryCommand::Remove(args) => remove_history_entry(store, &args.connection),
            }
        }
    }
}

fn list_history(store: &History) -> Result<String> {
    let payload = json!({
        "status": "ok",
        "history_path": store.path().to_string_lossy(),
        "entries": store.entries(),
    });
    Ok(serde_json::to_string_pretty(&payload)?)
}

fn clear_history(mut store: History) -> Result<String> {
    let removed = store.clear();
    store.save()?;

    let payload = json!({
        "status": "cleared",
        "history_path": store.path().to_string_lossy(),
        "removed_entries": removed,
    });
    Ok(serde_json::to_string_pretty(&payload)?)
}

fn remove_history_entry(mut store: History, connection: &str) -> Result<String> {
    let (status, message) = if store.remove(connection) {
        store.save()?;
        ("removed", "entry removed")
    } else {
        ("not_found", "entry not found")
    };

    let payload = json!({
        "status": status,
        "history_path": store.path().to_string_lossy(),
        "entry": connection,
        "message": message,
    });
    Ok(serde_json::to_string_pretty(&payload)?)
}
