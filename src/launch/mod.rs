//! Command building and process launch for the 1C starter.
mod command;
mod starter;

pub use command::{LaunchCommand, LaunchMode, DEFAULT_STARTER_PATH};
pub use starter::{LaunchOutcome, Starter};
