use std::{
    env,
    path::{Path, PathBuf},
};

/// Walk up from the working directory to the workspace root.
pub fn repo_root() -> anyhow::Result<PathBuf> {
    let mut dir = env::current_dir()?;
    loop {
        if is_workspace_root(&dir) {
            return Ok(dir);
        }
        if !dir.pop() {
            anyhow::bail!("failed to find workspace root (no Cargo.toml with [workspace])");
        }
    }
}

fn is_workspace_root(dir: &Path) -> bool {
    std::fs::read_to_string(dir.join("Cargo.toml"))
        .map(|manifest| manifest.contains("[workspace]"))
        .unwrap_or(false)
}
