//! Launch flow and process exit handling.
mod startup;

pub use startup::{
    dry_run_payload, forwarded_exit_code, run_interactive, run_launch, RuntimeExit,
    EXIT_STARTER_NOT_FOUND, EXIT_UNRECOGNIZED_FORMAT,
};
