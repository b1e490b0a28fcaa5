//! End-to-end flow: branch name -> key -> persisted artifacts.
//!
//! Drives graft-keys and graft-fs together the way the publishing
//! orchestration does: sanitize the branch into a directory key, then
//! atomically persist state, metadata, and rendered output under it.

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct BranchState {
    branch: String,
    revision: u64,
}

#[test]
fn test_branch_artifacts_land_under_sanitized_key() {
    let temp = TempDir::new().unwrap();

    let key = graft_keys::branch_to_key("team/feature...v2").unwrap();
    assert_eq!(key, "team-feature.v2");

    let branch_dir = temp.path().join(&key);
    let state = BranchState {
        branch: "team/feature...v2".into(),
        revision: 3,
    };

    graft_fs::write_json(&branch_dir.join("state.json"), &state).unwrap();
    graft_fs::write_yaml(
        &branch_dir.join("metadata.yaml"),
        &json!({"title": "Feature v2", "draft": false}),
    )
    .unwrap();
    graft_fs::write_text(&branch_dir.join("index.html"), "<h1>Feature v2</h1>").unwrap();

    let loaded: BranchState = graft_fs::read_json(&branch_dir.join("state.json")).unwrap();
    assert_eq!(loaded, state);

    let meta: serde_yaml::Value = graft_fs::read_yaml(&branch_dir.join("metadata.yaml")).unwrap();
    assert_eq!(meta["title"], serde_yaml::Value::from("Feature v2"));

    assert_eq!(
        graft_fs::read_text(&branch_dir.join("index.html")).unwrap(),
        "<h1>Feature v2</h1>"
    );

    // Everything stayed inside the sandbox directory.
    let top_level: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(top_level, vec![std::ffi::OsString::from("team-feature.v2")]);
}

#[test]
fn test_hostile_branch_names_never_reach_the_writer() {
    let temp = TempDir::new().unwrap();

    for raw in ["..", "../../etc", "foo..bar", ".", "~"] {
        if let Ok(key) = graft_keys::branch_to_key(raw) {
            // Anything accepted must stay a single segment under the root.
            assert!(!key.contains('/') && !key.contains('\\'), "raw {raw:?}");
            graft_fs::write_text(&temp.path().join(&key).join("out.txt"), "ok").unwrap();
        }
    }

    // No write escaped the sandbox root.
    for entry in fs::read_dir(temp.path()).unwrap() {
        let entry = entry.unwrap();
        assert!(entry.path().starts_with(temp.path()));
    }
}

#[test]
fn test_republish_replaces_state_atomically() {
    let temp = TempDir::new().unwrap();
    let key = graft_keys::branch_to_key("graft/demo").unwrap();
    let state_path = temp.path().join(&key).join("state.json");

    graft_fs::write_json(&state_path, &json!({"revision": 1, "outputs": ["a.html"]})).unwrap();
    graft_fs::write_json(&state_path, &json!({"revision": 2, "outputs": []})).unwrap();

    let loaded: serde_json::Value = graft_fs::read_json(&state_path).unwrap();
    assert_eq!(loaded, json!({"revision": 2, "outputs": []}));

    // Identical logical state re-serializes to identical bytes, which is
    // what lets the orchestration diff for changes.
    let before = fs::read(&state_path).unwrap();
    graft_fs::write_json(&state_path, &json!({"outputs": [], "revision": 2})).unwrap();
    assert_eq!(fs::read(&state_path).unwrap(), before);

    // Labels attached to the publish record pass the same gate everywhere.
    graft_keys::validate_label("profile", "production").unwrap();
    assert!(graft_keys::validate_label("profile", "prod env").is_err());
}
