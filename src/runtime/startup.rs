use std::{
    io::{self, IsTerminal},
    path::Path,
    process::ExitCode,
};

use anyhow::{anyhow, Context, Error, Result};
use ratatui::{crossterm::event, DefaultTerminal};
use serde_json::json;
use tracing::warn;

use crate::{
    cli::{ConnectionPrompt, LaunchProfile, PromptAction},
    connection::ConnectionRequest,
    launch::{LaunchCommand, LaunchOutcome},
    lib::errors::{ConnectionError, LaunchError},
};

/// Exit code for a connection string that matches no known form.
pub const EXIT_UNRECOGNIZED_FORMAT: u8 = 3;
/// Exit code for a starter executable missing at its configured path.
pub const EXIT_STARTER_NOT_FOUND: u8 = 4;

/// Bundles a runtime error message with an exit code.
///
/// Code 2 is left to clap for usage errors.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    code: u8,
}

impl RuntimeExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            code: exit_code_for(&err),
            message: format!("{err:#}"),
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        ExitCode::from(self.code)
    }

    pub fn code(&self) -> u8 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

fn exit_code_for(err: &Error) -> u8 {
    if err.downcast_ref::<ConnectionError>().is_some() {
        return EXIT_UNRECOGNIZED_FORMAT;
    }
    if let Some(LaunchError::ExecutableNotFound { .. }) = err.downcast_ref::<LaunchError>() {
        return EXIT_STARTER_NOT_FOUND;
    }
    1
}

/// Map the starter's exit status onto ours.
///
/// Codes outside `0..=255` and signal terminations become 1.
pub fn forwarded_exit_code(code: Option<i32>) -> u8 {
    code.and_then(|code| u8::try_from(code).ok()).unwrap_or(1)
}

/// Classify, build, and launch one connection string.
pub async fn run_launch(
    profile: &LaunchProfile,
    request: ConnectionRequest,
) -> Result<ExitCode, RuntimeExit> {
    let target = request.classify().map_err(RuntimeExit::from_error)?;
    let starter = profile.starter();
    let command = starter.command(&target, request.mode());

    if profile.dry_run {
        let payload = dry_run_payload(&command, profile.settings_source.as_deref())
            .map_err(RuntimeExit::from_error)?;
        println!("{payload}");
        return Ok(ExitCode::SUCCESS);
    }

    let outcome = starter
        .launch(&command, profile.wait)
        .await
        .map_err(RuntimeExit::from_error)?;
    record_history(profile, &request.raw);

    Ok(match outcome {
        LaunchOutcome::Detached => ExitCode::SUCCESS,
        LaunchOutcome::Exited(code) => ExitCode::from(forwarded_exit_code(code)),
    })
}

/// Let the user pick or type a connection string in a terminal UI, then launch it.
pub async fn run_interactive(
    profile: &LaunchProfile,
    designer: bool,
) -> Result<ExitCode, RuntimeExit> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        return Err(RuntimeExit::from_error(anyhow!(
            "No connection string given and no terminal to ask for one; pass CONNECTION"
        )));
    }

    let history = profile.load_history().map_err(RuntimeExit::from_error)?;
    let mut prompt = ConnectionPrompt::new(history.entries().to_vec(), designer);

    let mut terminal = ratatui::try_init()
        .context("failed to set up the terminal")
        .map_err(RuntimeExit::from_error)?;
    let choice = pick_connection(&mut terminal, &mut prompt, profile);
    ratatui::restore();

    match choice.map_err(RuntimeExit::from_error)? {
        Some(request) => run_launch(profile, request).await,
        None => Ok(ExitCode::SUCCESS),
    }
}

fn pick_connection(
    terminal: &mut DefaultTerminal,
    prompt: &mut ConnectionPrompt,
    profile: &LaunchProfile,
) -> Result<Option<ConnectionRequest>> {
    loop {
        terminal
            .draw(|frame| prompt.render(frame))
            .context("failed to draw the prompt")?;
        let event = event::read().context("failed to read terminal input")?;

        match prompt.handle_event(&event) {
            PromptAction::Continue => {}
            PromptAction::Quit => return Ok(None),
            PromptAction::Submit(raw) => {
                let request = ConnectionRequest::new(raw, prompt.designer());
                match check_choice(profile, &request) {
                    Ok(()) => return Ok(Some(request)),
                    Err(message) => prompt.show_error(message),
                }
            }
        }
    }
}

/// Errors the user can fix without leaving the prompt, as display text.
fn check_choice(profile: &LaunchProfile, request: &ConnectionRequest) -> Result<(), String> {
    request
        .classify()
        .map_err(|err| format!("Parsing error: {err}"))?;
    if profile.dry_run {
        return Ok(());
    }
    profile
        .starter()
        .ensure_present()
        .map_err(|err| format!("Launcher error: {err}"))
}

pub fn dry_run_payload(
    command: &LaunchCommand,
    settings_source: Option<&Path>,
) -> serde_json::Result<String> {
    let payload = json!({
        "status": "planned",
        "settings": settings_source.map(|path| path.to_string_lossy()),
        "kind": command.kind,
        "mode": command.mode,
        "executable": command.executable.to_string_lossy(),
        "args": command.args,
        "command_line": command.display(),
    });
    serde_json::to_string_pretty(&payload)
}

fn record_history(profile: &LaunchProfile, raw: &str) {
    if !profile.record_history {
        return;
    }

    let result = profile.load_history().and_then(|mut history| {
        history.record(raw);
        history.save()
    });
    if let Err(err) = result {
        warn!(
            target: "basestart::history",
            reason = %err,
            "Launch succeeded but history could not be updated"
        );
    }
}
