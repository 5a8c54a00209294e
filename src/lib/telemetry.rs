//! Telemetry initialization and launch event helpers.

use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "warn";

/// Initialize `tracing` and format diagnostics on stderr.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Payload describing a starter invocation as structured telemetry.
#[derive(Debug)]
pub struct LaunchTelemetry<'a> {
    pub kind: &'a str,
    pub mode: &'a str,
    pub command_line: &'a str,
    pub wait: bool,
}

/// Span helper recording the lifetime of one starter process.
pub struct LaunchSpan {
    span: Span,
    started_at: Instant,
}

impl LaunchSpan {
    /// Open the span and emit the launch event inside it.
    pub fn start(telemetry: &LaunchTelemetry<'_>) -> Self {
        let span = info_span!(
            target: "basestart::launch",
            "starter",
            kind = telemetry.kind,
            mode = telemetry.mode
        );
        {
            let _entered = span.enter();
            info!(
                target: "basestart::launch",
                command_line = telemetry.command_line,
                wait = telemetry.wait,
                "Starting 1C starter"
            );
        }
        Self {
            span,
            started_at: Instant::now(),
        }
    }

    /// Close the span while recording how the starter finished.
    pub fn finish(self, status: &'static str, exit_code: Option<i32>) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "basestart::launch",
            status = status,
            exit_code = exit_code,
            elapsed_ms = elapsed_ms,
            "Starter finished"
        );
    }
}
