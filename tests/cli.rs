use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn parse_jsonl(stdout: &[u8]) -> Vec<Value> {
    let s = String::from_utf8_lossy(stdout);
    s.lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str::<Value>(l).expect("valid jsonl line"))
        .collect()
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn tripinfo() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tripinfo"));
    cmd.env_remove("TRIPINFO_SHEET_URL")
        .env_remove("TRIPINFO_TIMEOUT_SECS")
        .env_remove("RUST_LOG");
    cmd
}

fn str_field<'a>(item: &'a Value, key: &str) -> Option<&'a str> {
    item.get(key).and_then(|v| v.as_str())
}

#[test]
fn offline_lists_builtin_entries() {
    let mut cmd = tripinfo();
    cmd.arg("--offline").arg("list");

    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);

    let ids: Vec<_> = items.iter().filter_map(|v| v["id"].as_u64()).collect();
    assert_eq!(ids, vec![1, 2]);
    assert!(items
        .iter()
        .all(|v| str_field(v, "source_mode") == Some("fallback")));
    assert!(items.iter().all(|v| v.get("answer").is_none()));
}

#[test]
fn file_source_is_searched_case_insensitively() {
    let temp = tempdir().unwrap();
    let sheet = temp.path().join("sheet.csv");
    write_file(
        &sheet,
        "category,question,answer,keywords\n\
Travel,When does the bus leave?,At eight,departure\n\
Hotel,Where do we sleep?,Grand Hotel,rooms\n\
Travel,Can I bring a bike?,No,BUS rack\n",
    );

    let mut cmd = tripinfo();
    cmd.arg("--file").arg(&sheet).arg("list").arg("bus");

    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);

    let ids: Vec<_> = items.iter().filter_map(|v| v["id"].as_u64()).collect();
    assert_eq!(ids, vec![100, 102]);
    assert_eq!(str_field(&items[0], "source_mode"), Some("file"));
}

#[test]
fn list_filters_by_category_and_expands() {
    let temp = tempdir().unwrap();
    let sheet = temp.path().join("sheet.csv");
    write_file(
        &sheet,
        "category,question,answer\nTravel,Bus?,At eight\nHotel,Room?,Twin rooms\n",
    );

    let mut cmd = tripinfo();
    cmd.arg("--file")
        .arg(&sheet)
        .arg("list")
        .arg("--category")
        .arg("Hotel")
        .arg("--expand");

    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);

    assert_eq!(items.len(), 1);
    assert_eq!(str_field(&items[0], "question"), Some("Room?"));
    assert_eq!(str_field(&items[0], "answer"), Some("Twin rooms"));
}

#[test]
fn no_matches_yields_notice() {
    let mut cmd = tripinfo();
    cmd.arg("--offline").arg("list").arg("train");

    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);

    assert_eq!(items.len(), 1);
    assert_eq!(str_field(&items[0], "kind"), Some("notice"));
    assert_eq!(items[0]["notices"][0]["code"], "NO_MATCHES");
}

#[test]
fn missing_file_falls_back_with_notice() {
    let temp = tempdir().unwrap();

    let mut cmd = tripinfo();
    cmd.arg("--file")
        .arg(temp.path().join("nope.csv"))
        .arg("--no-color")
        .arg("list");

    let assert = cmd
        .assert()
        .success()
        .stderr(predicate::str::contains("nope.csv"));
    let items = parse_jsonl(&assert.get_output().stdout);

    assert_eq!(items[0]["notices"][0]["code"], "READ_FAILURE");
    let ids: Vec<_> = items.iter().filter_map(|v| v["id"].as_u64()).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn unreachable_url_shows_fetch_notice() {
    let mut cmd = tripinfo();
    cmd.arg("--url")
        .arg("http://127.0.0.1:1/sheet.csv")
        .arg("--timeout")
        .arg("2")
        .arg("--no-color")
        .arg("list");

    let assert = cmd.assert().success().stderr(predicate::str::contains(
        "Could not fetch updated info. Showing saved info.",
    ));
    let items = parse_jsonl(&assert.get_output().stdout);

    assert_eq!(items[0]["notices"][0]["code"], "FETCH_FAILURE");
    assert!(items
        .iter()
        .all(|v| str_field(v, "source_mode") == Some("fallback")));
}

#[test]
fn quiet_suppresses_banner() {
    let temp = tempdir().unwrap();

    let mut cmd = tripinfo();
    cmd.arg("--file")
        .arg(temp.path().join("nope.csv"))
        .arg("--quiet")
        .arg("list");

    cmd.assert().success().stderr(predicate::str::is_empty());
}

#[test]
fn empty_sheet_keeps_builtin_entries_silently() {
    let temp = tempdir().unwrap();
    let sheet = temp.path().join("sheet.csv");
    write_file(&sheet, "category,question,answer\n");

    let mut cmd = tripinfo();
    cmd.arg("--file").arg(&sheet).arg("--quiet").arg("list");

    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);

    let ids: Vec<_> = items.iter().filter_map(|v| v["id"].as_u64()).collect();
    assert_eq!(ids, vec![1, 2]);
    assert!(items.iter().all(|v| v.get("notices").is_none()));
}

#[test]
fn show_unknown_id_warns() {
    let mut cmd = tripinfo();
    cmd.arg("--offline").arg("show").arg("999");

    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);

    assert_eq!(items[0]["notices"][0]["code"], "NOT_FOUND");
}

#[test]
fn lint_missing_file_fails() {
    let temp = tempdir().unwrap();

    let mut cmd = tripinfo();
    cmd.arg("--file").arg(temp.path().join("nope.csv")).arg("lint");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load sheet for linting"));
}

#[test]
fn lint_without_source_reports_no_source() {
    let mut cmd = tripinfo();
    cmd.arg("--offline").arg("lint");

    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);

    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["notices"][0]["code"], "NO_SOURCE");
}

#[test]
fn unknown_format_falls_back_to_jsonl() {
    let mut cmd = tripinfo();
    cmd.arg("--offline").arg("--format").arg("yaml").arg("categories");

    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);
    assert_eq!(str_field(&items[0], "category"), Some("All"));
}
