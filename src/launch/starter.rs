//! Spawning the starter executable.

use std::path::PathBuf;

use crate::{
    connection::ConnectionTarget,
    lib::{
        errors::LaunchError,
        telemetry::{LaunchSpan, LaunchTelemetry},
    },
};

use super::{LaunchCommand, LaunchMode};

/// How a launched starter finished from our point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The starter ran to completion; `None` when it was killed by a signal.
    Exited(Option<i32>),
    /// The starter was spawned and left running.
    Detached,
}

/// Handle on the starter executable at a fixed path.
#[derive(Debug, Clone)]
pub struct Starter {
    path: PathBuf,
}

impl Starter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Fail with `ExecutableNotFound` unless the starter file exists.
    pub fn ensure_present(&self) -> Result<(), LaunchError> {
        if self.path.is_file() {
            return Ok(());
        }
        Err(LaunchError::ExecutableNotFound {
            path: self.path.clone(),
        })
    }

    /// Build the invocation of this starter for `target`.
    pub fn command(&self, target: &ConnectionTarget, mode: LaunchMode) -> LaunchCommand {
        LaunchCommand::build(&self.path, target, mode)
    }

    /// Spawn `command` and, when `wait` is set, block until it exits.
    pub async fn launch(
        &self,
        command: &LaunchCommand,
        wait: bool,
    ) -> Result<LaunchOutcome, LaunchError> {
        self.ensure_present()?;

        let command_line = command.display();
        let span = LaunchSpan::start(&LaunchTelemetry {
            kind: command.kind,
            mode: command.mode.as_arg(),
            command_line: &command_line,
            wait,
        });

        let mut child = command
            .to_command()
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                path: self.path.clone(),
                source,
            })?;

        if !wait {
            span.finish("detached", None);
            return Ok(LaunchOutcome::Detached);
        }

        let status = child
            .wait()
            .await
            .map_err(|source| LaunchError::Wait { source })?;
        span.finish("exited", status.code());
        Ok(LaunchOutcome::Exited(status.code()))
    }
}
