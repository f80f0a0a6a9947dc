#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub fn diary_cmd() -> Command {
    let mut cmd = Command::cargo_bin("devdiary").unwrap();
    cmd.env_remove("DEVDIARY_ROOT");
    cmd.env_remove("DEVDIARY_LOG");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    // Day bounds are local; seeded noon-UTC entries must stay on their day
    cmd.env("TZ", "UTC0");
    cmd
}

/// A freshly initialized journal in a temp directory
pub fn init_journal() -> TempDir {
    let temp = TempDir::new().unwrap();
    diary_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

/// Two entries: a January bug fix and a February favorite feature
pub const SAMPLE_ENTRIES: &str = r#"[
  {"id":"22222222-aaaa-4000-8000-000000000002","title":"Feature","content":"Added dark mode","date":"2024-02-01T12:00:00.000Z","tags":["feature","ui"],"favorite":true},
  {"id":"11111111-bbbb-4000-8000-000000000001","title":"Bug fix","content":"Fixed null pointer","date":"2024-01-01T12:00:00.000Z","tags":["bug"],"favorite":false}
]"#;

pub fn seed_entries(root: &Path, json: &str) {
    fs::write(root.join(".devdiary").join("journal-entries"), json).unwrap();
}

/// Entries as currently stored on disk
pub fn stored_entries(root: &Path) -> Vec<serde_json::Value> {
    let raw = fs::read_to_string(root.join(".devdiary").join("journal-entries")).unwrap();
    serde_json::from_str(&raw).unwrap()
}
