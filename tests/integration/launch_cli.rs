use serde_json::json;
use tempfile::tempdir;

use crate::common::{fixture, run_in, stderr_text, stdout_json, HISTORY_FILE};

#[test]
fn dry_run_prints_designer_command_for_short_server_form() {
    let temp = tempdir().expect("can create temporary directory");

    let output = run_in(temp.path(), &["--dry-run", "-d", "my-server;my-base"]);

    assert!(output.status.success(), "stderr: {}", stderr_text(&output));
    let payload = stdout_json(&output);
    assert_eq!(payload["status"], "planned");
    assert_eq!(payload["kind"], "simple_server");
    assert_eq!(payload["args"], json!(["DESIGNER", "/S", r"my-server\my-base"]));
    assert!(
        !temp.path().join(HISTORY_FILE).exists(),
        "dry runs must not touch history"
    );
}

#[test]
fn dry_run_covers_file_and_web_forms() {
    let temp = tempdir().expect("can create temporary directory");

    let file = stdout_json(&run_in(temp.path(), &["--dry-run", r#"File="C:\x";"#]));
    assert_eq!(file["args"], json!(["ENTERPRISE", "/F", r"C:\x"]));

    let web = stdout_json(&run_in(temp.path(), &["--dry-run", r#"ws="https://h/b";"#]));
    assert_eq!(web["args"], json!(["ENTERPRISE", "/WS", "https://h/b"]));
}

#[test]
fn dry_run_accepts_ibases_connect_lines() {
    let temp = tempdir().expect("can create temporary directory");

    let output = run_in(temp.path(), &["--dry-run", r#"Connect=Srvr="s";Ref="b";"#]);

    assert!(output.status.success(), "stderr: {}", stderr_text(&output));
    let payload = stdout_json(&output);
    assert_eq!(payload["kind"], "full_server");
    assert_eq!(payload["args"], json!(["ENTERPRISE", "/S", r"s\b"]));
}

#[test]
fn dry_run_reports_settings_file_in_use() {
    let temp = tempdir().expect("can create temporary directory");
    let settings = fixture("settings_valid.toml");

    let output = run_in(
        temp.path(),
        &["--dry-run", "--config", &settings.to_string_lossy(), "srv;base"],
    );

    assert!(output.status.success(), "stderr: {}", stderr_text(&output));
    let payload = stdout_json(&output);
    assert_eq!(payload["settings"], settings.to_string_lossy().as_ref());
    assert_eq!(payload["executable"], r"D:\1cv8\common\1cestart.exe");
}

#[test]
fn no_connection_without_terminal_fails_instead_of_prompting() {
    let temp = tempdir().expect("can create temporary directory");

    let output = run_in(temp.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr_text(&output);
    assert!(stderr.contains("pass CONNECTION"), "stderr: {stderr}");
}

#[test]
fn unrecognized_connection_string_fails_with_pattern_hint() {
    let temp = tempdir().expect("can create temporary directory");

    let output = run_in(temp.path(), &["just-a-name"]);

    assert_eq!(output.status.code(), Some(3));
    let stderr = stderr_text(&output);
    assert!(stderr.contains("expected pattern"), "stderr: {stderr}");
}

#[test]
fn missing_starter_fails_with_not_found() {
    let temp = tempdir().expect("can create temporary directory");
    let starter = temp.path().join("1cestart.exe");

    let output = run_in(
        temp.path(),
        &["--starter", &starter.to_string_lossy(), "srv;base"],
    );

    assert_eq!(output.status.code(), Some(4));
    let stderr = stderr_text(&output);
    assert!(stderr.contains("Could not locate"), "stderr: {stderr}");
    assert!(!temp.path().join(HISTORY_FILE).exists());
}

#[test]
fn missing_explicit_settings_file_is_an_error() {
    let temp = tempdir().expect("can create temporary directory");

    let output = run_in(
        temp.path(),
        &["--config", &fixture("does_not_exist.toml").to_string_lossy(), "srv;base"],
    );

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn subcommand_and_connection_string_conflict() {
    let temp = tempdir().expect("can create temporary directory");

    let output = run_in(temp.path(), &["srv;base", "history", "list"]);

    assert_eq!(output.status.code(), Some(2));
}

#[cfg(unix)]
mod with_fake_starter {
    use std::fs;

    use tempfile::tempdir;

    use crate::common::{
        fake_starter, recorded_calls, run_in, stderr_text, HISTORY_FILE,
    };

    #[test]
    fn starter_exit_code_is_forwarded_and_history_recorded() {
        let temp = tempdir().expect("can create temporary directory");
        let starter = fake_starter(temp.path(), 5);

        let output = run_in(
            temp.path(),
            &["--starter", &starter.to_string_lossy(), r#"Srvr="s";Ref="b";"#],
        );

        assert_eq!(output.status.code(), Some(5), "stderr: {}", stderr_text(&output));
        assert_eq!(recorded_calls(temp.path()), vec![r"ENTERPRISE /S s\b"]);
        let history = fs::read_to_string(temp.path().join(HISTORY_FILE)).expect("history written");
        assert_eq!(history, "Srvr=\"s\";Ref=\"b\";\n");
    }

    #[test]
    fn no_history_flag_skips_recording() {
        let temp = tempdir().expect("can create temporary directory");
        let starter = fake_starter(temp.path(), 0);

        let output = run_in(
            temp.path(),
            &["--no-history", "--starter", &starter.to_string_lossy(), "srv;base"],
        );

        assert!(output.status.success(), "stderr: {}", stderr_text(&output));
        assert_eq!(recorded_calls(temp.path()), vec![r"ENTERPRISE /S srv\base"]);
        assert!(!temp.path().join(HISTORY_FILE).exists());
    }

    #[test]
    fn settings_file_in_working_directory_selects_starter() {
        let temp = tempdir().expect("can create temporary directory");
        let starter = fake_starter(temp.path(), 0);
        fs::write(
            temp.path().join("basestart.toml"),
            format!(
                "[starter]\npath = '{}'\n\n[history]\npath = \"state/recent.txt\"\n",
                starter.display()
            ),
        )
        .expect("can write settings");

        let output = run_in(temp.path(), &["-d", r#"File="/srv/bases/demo";"#]);

        assert!(output.status.success(), "stderr: {}", stderr_text(&output));
        assert_eq!(recorded_calls(temp.path()), vec!["DESIGNER /F /srv/bases/demo"]);
        assert!(temp.path().join("state/recent.txt").exists());
    }
}
