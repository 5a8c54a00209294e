use tempfile::tempdir;

use crate::common::run_in;

#[test]
fn root_help_lists_flags_and_history_subcommand() {
    let temp = tempdir().expect("can create temporary directory");
    let output = run_in(temp.path(), &["--help"]);
    assert!(output.status.success(), "basestart --help should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    for needle in ["--designer", "--starter", "--dry-run", "--no-wait", "history"] {
        assert!(
            stdout.contains(needle),
            "--help should list {needle}, got:\n{stdout}"
        );
    }
}

#[test]
fn version_output_uses_name_and_semver_format() {
    let temp = tempdir().expect("can create temporary directory");
    let output = run_in(temp.path(), &["--version"]);
    assert!(output.status.success(), "basestart --version should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    let mut parts = stdout.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let version = parts.next().unwrap_or_default();

    assert_eq!(name, "basestart", "unexpected binary name: {stdout}");
    assert!(
        version.chars().all(|c| c.is_ascii_digit() || c == '.') && version.split('.').count() == 3,
        "version should look like SemVer (X.Y.Z), got: {stdout}"
    );
    assert!(parts.next().is_none(), "version output should be two tokens");
}
