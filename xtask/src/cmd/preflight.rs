use std::{
    path::Path,
    process::{Command, Stdio},
};

use anyhow::Result;

use crate::repo;

/// Gate steps in execution order: label, then cargo arguments.
const STEPS: &[(&str, &[&str])] = &[
    ("cargo check --workspace", &["check", "--workspace"]),
    ("cargo test --workspace", &["test", "--workspace"]),
    ("cargo fmt --all -- --check", &["fmt", "--all", "--", "--check"]),
    (
        "cargo clippy --workspace --all-targets -- -D warnings",
        &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
    ),
];
const RELEASE_STEP: (&str, &[&str]) = ("cargo build --release", &["build", "--release"]);

pub fn run(quick: bool) -> Result<()> {
    let root = repo::repo_root()?;
    for (label, args) in STEPS {
        run_step(&root, label, args)?;
    }
    if !quick {
        run_step(&root, RELEASE_STEP.0, RELEASE_STEP.1)?;
    }
    eprintln!("==> preflight passed");
    Ok(())
}

fn run_step(root: &Path, label: &str, args: &[&str]) -> Result<()> {
    eprintln!("==> {label}");
    let status = Command::new("cargo")
        .args(args)
        .current_dir(root)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;

    if !status.success() {
        anyhow::bail!("{label} failed (status {status})");
    }
    Ok(())
}
