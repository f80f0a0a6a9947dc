//! Integration tests for list and tags commands

#![allow(deprecated)]

use predicates::prelude::*;

mod common;
use common::{diary_cmd, init_journal, seed_entries, SAMPLE_ENTRIES};

fn listed_titles(root: &std::path::Path, args: &[&str]) -> Vec<String> {
    let output = diary_cmd()
        .current_dir(root)
        .arg("list")
        .arg("--json")
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success());

    let entries: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    entries
        .iter()
        .map(|e| e["title"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_list_empty_journal() {
    let temp = init_journal();

    diary_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your journal is empty"));
}

#[test]
fn test_list_filtered_to_nothing() {
    let temp = init_journal();
    seed_entries(temp.path(), SAMPLE_ENTRIES);

    diary_cmd()
        .current_dir(temp.path())
        .args(["list", "--search", "kubernetes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching entries found"));
}

#[test]
fn test_list_shows_newest_first() {
    let temp = init_journal();
    seed_entries(temp.path(), SAMPLE_ENTRIES);

    let output = diary_cmd()
        .current_dir(temp.path())
        .arg("list")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "★ Feature  [22222222]");
    assert_eq!(lines[1], "    Added dark mode");
    assert!(lines[2].starts_with("    #feature #ui  ·  "));
    assert_eq!(lines[3], "  Bug fix  [11111111]");
}

#[test]
fn test_list_search_is_case_insensitive() {
    let temp = init_journal();
    seed_entries(temp.path(), SAMPLE_ENTRIES);

    assert_eq!(listed_titles(temp.path(), &["-s", "DARK"]), vec!["Feature"]);
    assert_eq!(listed_titles(temp.path(), &["-s", "bug"]), vec!["Bug fix"]);
}

#[test]
fn test_list_favorites_only() {
    let temp = init_journal();
    seed_entries(temp.path(), SAMPLE_ENTRIES);

    assert_eq!(listed_titles(temp.path(), &["--favorites"]), vec!["Feature"]);
}

#[test]
fn test_list_from_date() {
    let temp = init_journal();
    seed_entries(temp.path(), SAMPLE_ENTRIES);

    assert_eq!(
        listed_titles(temp.path(), &["--from", "2024-01-15"]),
        vec!["Feature"]
    );
}

#[test]
fn test_list_to_date_is_inclusive() {
    let temp = init_journal();
    seed_entries(temp.path(), SAMPLE_ENTRIES);

    assert_eq!(
        listed_titles(temp.path(), &["--to", "2024-01-01"]),
        vec!["Bug fix"]
    );
    assert_eq!(
        listed_titles(temp.path(), &["--from", "2024-01-01", "--to", "2024-02-01"]),
        vec!["Feature", "Bug fix"]
    );
}

#[cfg(unix)]
#[test]
fn test_day_bounds_follow_local_timezone() {
    let temp = init_journal();
    seed_entries(temp.path(), SAMPLE_ENTRIES);

    // At UTC+14 the Jan 1 noon-UTC entry is already on Jan 2
    let at_plus_14 = |args: &[&str]| {
        let output = diary_cmd()
            .current_dir(temp.path())
            .env("TZ", "XYZ-14")
            .args(["list", "--json"])
            .args(args)
            .output()
            .unwrap();
        assert!(output.status.success());
        let entries: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
        entries.len()
    };

    assert_eq!(at_plus_14(&["--to", "2024-01-01"]), 0);
    assert_eq!(at_plus_14(&["--from", "2024-01-02", "--to", "2024-01-02"]), 1);
}

#[test]
fn test_list_tags_match_any() {
    let temp = init_journal();
    seed_entries(temp.path(), SAMPLE_ENTRIES);

    assert_eq!(listed_titles(temp.path(), &["--tag", "ui"]), vec!["Feature"]);
    assert_eq!(
        listed_titles(temp.path(), &["--tag", "ui", "--tag", "bug"]),
        vec!["Feature", "Bug fix"]
    );
    assert!(listed_titles(temp.path(), &["--tag", "bug", "--favorites"]).is_empty());
}

#[test]
fn test_list_invalid_date_fails_with_code_4() {
    let temp = init_journal();

    diary_cmd()
        .current_dir(temp.path())
        .args(["list", "--from", "01-15-2024"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}

#[test]
fn test_list_today_includes_new_entry() {
    let temp = init_journal();

    diary_cmd()
        .current_dir(temp.path())
        .args(["new", "-t", "Fresh", "-c", "Just written"])
        .assert()
        .success();

    assert_eq!(
        listed_titles(temp.path(), &["--from", "today", "--to", "today"]),
        vec!["Fresh"]
    );
}

#[test]
fn test_malformed_store_reads_as_empty() {
    let temp = init_journal();
    seed_entries(temp.path(), "{ definitely not json");

    diary_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your journal is empty"));

    // The next write replaces the damaged slot
    diary_cmd()
        .current_dir(temp.path())
        .args(["new", "-t", "Recovered", "-c", "Starting over"])
        .assert()
        .success();
    assert_eq!(listed_titles(temp.path(), &[]), vec!["Recovered"]);
}

#[test]
fn test_tags_first_seen_order() {
    let temp = init_journal();
    seed_entries(temp.path(), SAMPLE_ENTRIES);

    diary_cmd()
        .current_dir(temp.path())
        .arg("tags")
        .assert()
        .success()
        .stdout("#feature\n#ui\n#bug\n");
}

#[test]
fn test_tags_empty() {
    let temp = init_journal();

    diary_cmd()
        .current_dir(temp.path())
        .arg("tags")
        .assert()
        .success()
        .stdout("No tags found\n");
}
