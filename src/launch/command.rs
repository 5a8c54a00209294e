//! Argument assembly for the 1C starter.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tokio::process::Command;

use crate::connection::ConnectionTarget;

/// Location of `1cestart.exe` in a default platform installation.
pub const DEFAULT_STARTER_PATH: &str = r"C:\Program Files\1cv8\common\1cestart.exe";

/// Which client the starter opens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchMode {
    #[default]
    Enterprise,
    Designer,
}

impl LaunchMode {
    pub const fn from_designer_flag(designer: bool) -> Self {
        if designer {
            LaunchMode::Designer
        } else {
            LaunchMode::Enterprise
        }
    }

    /// Mode keyword as the starter expects it on the command line.
    pub const fn as_arg(&self) -> &'static str {
        match self {
            LaunchMode::Enterprise => "ENTERPRISE",
            LaunchMode::Designer => "DESIGNER",
        }
    }
}

/// Fully assembled starter invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchCommand {
    pub kind: &'static str,
    pub mode: LaunchMode,
    pub executable: PathBuf,
    pub args: Vec<String>,
}

impl LaunchCommand {
    /// Build the argument list for `target`.
    ///
    /// Both server forms share the `/S host\base` switch.
    pub fn build(executable: &Path, target: &ConnectionTarget, mode: LaunchMode) -> Self {
        let (switch, value) = match target {
            ConnectionTarget::SimpleServer { host, base }
            | ConnectionTarget::FullServer { host, base } => ("/S", format!("{host}\\{base}")),
            ConnectionTarget::File { path } => ("/F", path.clone()),
            ConnectionTarget::Web { url } => ("/WS", url.clone()),
        };

        Self {
            kind: target.kind(),
            mode,
            executable: executable.to_path_buf(),
            args: vec![mode.as_arg().to_string(), switch.to_string(), value],
        }
    }

    /// Render the invocation as a single line, quoting arguments that need it.
    pub fn display(&self) -> String {
        let mut parts = Vec::with_capacity(self.args.len() + 1);
        parts.push(quote_arg(&self.executable.to_string_lossy()));
        parts.extend(self.args.iter().map(|arg| quote_arg(arg)));
        parts.join(" ")
    }

    /// Convert into a process command with inherited stdio.
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.executable);
        command.args(&self.args);
        command
    }
}

fn quote_arg(arg: &str) -> String {
    let needs_quotes = arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || c == '"');
    if !needs_quotes {
        return arg.to_string();
    }
    format!("\"{}\"", arg.replace('"', "\\\""))
}
