use std::{
    path::{Path, PathBuf},
    process::{Command, Output, Stdio},
};

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_basestart");
pub const HISTORY_FILE: &str = "basestart_history.txt";

/// Run the binary in `dir` with stdin closed.
pub fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(BINARY_PATH)
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .output()
        .expect("basestart should run")
}

pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|err| {
        panic!(
            "stdout should be JSON ({err}): {}",
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

pub fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

pub fn fixture(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(relative)
}

/// Shell script standing in for 1cestart: appends its argv to `calls.txt`
/// in `dir` (one invocation per line) and exits with `exit_code`.
#[cfg(unix)]
pub fn fake_starter(dir: &Path, exit_code: i32) -> PathBuf {
    use std::{fs, os::unix::fs::PermissionsExt};

    let path = dir.join("fake-1cestart");
    let calls = dir.join("calls.txt");
    let script = format!(
        "#!/bin/sh\nprintf '%s\\n' \"$*\" >> '{}'\nexit {exit_code}\n",
        calls.display()
    );
    fs::write(&path, script).expect("can write fake starter");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("can mark fake starter executable");
    path
}

#[cfg(unix)]
pub fn recorded_calls(dir: &Path) -> Vec<String> {
    std::fs::read_to_string(dir.join("calls.txt"))
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}
