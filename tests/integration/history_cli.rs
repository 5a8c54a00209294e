use std::fs;

use serde_json::json;
use tempfile::tempdir;

use crate::common::{run_in, stderr_text, stdout_json, HISTORY_FILE};

#[test]
fn history_list_on_fresh_directory_is_empty() {
    let temp = tempdir().expect("can create temporary directory");

    let output = run_in(temp.path(), &["history", "list"]);

    assert!(output.status.success(), "stderr: {}", stderr_text(&output));
    let payload = stdout_json(&output);
    assert_eq!(payload["status"], "ok");
    assert_eq!(payload["entries"], json!([]));
}

#[test]
fn history_remove_then_clear() {
    let temp = tempdir().expect("can create temporary directory");
    let path = temp.path().join(HISTORY_FILE);
    fs::write(&path, "c;3\nb;2\na;1\n").expect("can seed history");

    let removed = run_in(temp.path(), &["history", "remove", "b;2"]);
    assert_eq!(stdout_json(&removed)["status"], "removed");

    let listed = run_in(temp.path(), &["history", "list"]);
    assert_eq!(stdout_json(&listed)["entries"], json!(["c;3", "a;1"]));

    let cleared = run_in(temp.path(), &["history", "clear"]);
    assert_eq!(stdout_json(&cleared)["removed_entries"], 2);
    assert_eq!(fs::read_to_string(&path).expect("file kept"), "");
}
