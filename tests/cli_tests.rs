//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const STEADY_PROFILE: &str = r#"{
  "login": "octocat",
  "name": "The Octocat",
  "contributionCalendar": {
    "totalContributions": 640,
    "weeks": [
      { "contributionDays": [
        { "date": "2024-05-05", "contributionCount": 3 },
        { "date": "2024-05-06", "contributionCount": 0 },
        { "date": "2024-05-07", "contributionCount": 5 }
      ] }
    ]
  },
  "pullRequests": [
    { "additions": 100, "deletions": 20, "changedFiles": 5, "merged": true },
    { "additions": 900, "deletions": 40, "changedFiles": 12, "merged": true },
    { "additions": 3000, "deletions": 0, "changedFiles": 30, "merged": false }
  ],
  "totalPullRequestReviewContributions": 35,
  "totalIssueContributions": 12,
  "repositories": [
    { "nameWithOwner": "octo/a", "defaultBranchRef": { "history": { "totalCount": 40 } } },
    { "nameWithOwner": "octo/b", "defaultBranchRef": { "history": { "totalCount": 20 } } },
    { "nameWithOwner": "octo/empty", "defaultBranchRef": null }
  ],
  "ownedRepos": [
    { "name": "a", "stargazerCount": 40, "forkCount": 4, "watchersCount": 6 }
  ]
}"#;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("impact-score"))
}

fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("utf8 path")
}

#[test]
fn test_cli_version() {
    cmd().arg("--version").assert().success().stdout(predicate::str::contains("impact-score"));
}

#[test]
fn test_cli_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Score GitHub contribution snapshots"))
        .stdout(predicate::str::contains("score"))
        .stdout(predicate::str::contains("snapshot"))
        .stdout(predicate::str::contains("batch"));
}

#[test]
fn test_score_json_report() {
    let tmp = TempDir::new().expect("tmp");
    let input = write_fixture(tmp.path(), "octocat.json", STEADY_PROFILE);

    let output = cmd()
        .current_dir(tmp.path())
        .args(["score", path_str(&input), "--no-timestamp"])
        .output()
        .expect("run score");
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).expect("json report");
    assert_eq!(report["impact"]["handle"], "octocat");
    assert_eq!(report["impact"]["profileType"], "collaborative");
    assert_eq!(report["stats"]["prsMergedCount"], 2);
    assert_eq!(report["stats"]["reposContributed"], 2);
    assert_eq!(report["stats"]["linesAdded"], 1000);
    assert!(report.get("generated_at").is_none());
    assert!(report["stats"].get("heatmapData").is_none());

    let composite = report["impact"]["compositeScore"].as_u64().expect("composite");
    let adjusted = report["impact"]["adjustedComposite"].as_u64().expect("adjusted");
    assert!(adjusted <= composite);
}

#[test]
fn test_score_text_summary() {
    let tmp = TempDir::new().expect("tmp");
    let input = write_fixture(tmp.path(), "octocat.json", STEADY_PROFILE);

    cmd()
        .current_dir(tmp.path())
        .args(["score", path_str(&input), "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("@octocat"))
        .stdout(predicate::str::contains("Tier:"))
        .stdout(predicate::str::contains("Dimensions:"));
}

#[test]
fn test_rust_log_enables_debug_without_verbose() {
    let tmp = TempDir::new().expect("tmp");
    let input = write_fixture(tmp.path(), "octocat.json", STEADY_PROFILE);

    cmd()
        .current_dir(tmp.path())
        .env("RUST_LOG", "debug")
        .args(["score", path_str(&input), "--no-timestamp"])
        .assert()
        .success()
        .stderr(predicate::str::contains("scored profile"));
}

#[test]
fn test_default_log_level_stays_quiet() {
    let tmp = TempDir::new().expect("tmp");
    let input = write_fixture(tmp.path(), "octocat.json", STEADY_PROFILE);

    cmd()
        .current_dir(tmp.path())
        .env_remove("RUST_LOG")
        .args(["score", path_str(&input), "--no-timestamp"])
        .assert()
        .success()
        .stderr(predicate::str::contains("scored profile").not());
}

#[test]
fn test_score_writes_report_into_new_directory() {
    let tmp = TempDir::new().expect("tmp");
    let input = write_fixture(tmp.path(), "octocat.json", STEADY_PROFILE);
    let report_path = tmp.path().join("out").join("reports").join("octocat.json");

    cmd()
        .current_dir(tmp.path())
        .args(["score", path_str(&input), "--no-timestamp", "-o", path_str(&report_path)])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&report_path).expect("report written");
    let report: Value = serde_json::from_str(&content).expect("json report");
    assert_eq!(report["impact"]["handle"], "octocat");
    assert!(report.get("generated_at").is_none());
}

#[test]
fn test_score_rejects_negative_counts() {
    let tmp = TempDir::new().expect("tmp");
    let input = write_fixture(
        tmp.path(),
        "bad.json",
        r#"{"login":"a","pullRequests":[{"additions":-1,"merged":true}]}"#,
    );

    cmd()
        .current_dir(tmp.path())
        .args(["score", path_str(&input)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed contribution payload"));
}

#[test]
fn test_score_missing_file_fails() {
    let tmp = TempDir::new().expect("tmp");
    cmd()
        .current_dir(tmp.path())
        .args(["score", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed reading contribution file"));
}

#[test]
fn test_explicit_config_overrides_solo_threshold() {
    let tmp = TempDir::new().expect("tmp");
    let input = write_fixture(tmp.path(), "octocat.json", STEADY_PROFILE);
    let config = write_fixture(tmp.path(), "strict.toml", "solo_threshold = 1000\n");

    let output = cmd()
        .current_dir(tmp.path())
        .args(["--config", path_str(&config), "score", path_str(&input), "--no-timestamp"])
        .output()
        .expect("run score");
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).expect("json report");
    assert_eq!(report["impact"]["profileType"], "solo");
}

#[test]
fn test_config_confidence_table_changes_flags() {
    let tmp = TempDir::new().expect("tmp");
    let input = write_fixture(tmp.path(), "octocat.json", STEADY_PROFILE);
    let config =
        write_fixture(tmp.path(), "lenient.toml", "[confidence]\nsparse_min_commits = 100000\n");

    let run = |extra: &[&str]| -> Value {
        let mut args: Vec<&str> = extra.to_vec();
        args.extend(["score", path_str(&input), "--no-timestamp"]);
        let output = cmd().current_dir(tmp.path()).args(&args).output().expect("run score");
        assert!(output.status.success());
        serde_json::from_slice(&output.stdout).expect("json report")
    };
    let flags = |report: &Value| -> Vec<String> {
        report["impact"]["confidencePenalties"]
            .as_array()
            .expect("penalties")
            .iter()
            .map(|p| p["flag"].as_str().expect("flag").to_string())
            .collect()
    };

    let default_report = run(&[]);
    assert!(flags(&default_report).contains(&"sparse_activity".to_string()));

    let lenient_report = run(&["--config", path_str(&config)]);
    assert!(!flags(&lenient_report).contains(&"sparse_activity".to_string()));
}

#[test]
fn test_explicit_bad_config_fails() {
    let tmp = TempDir::new().expect("tmp");
    let input = write_fixture(tmp.path(), "octocat.json", STEADY_PROFILE);
    let config = write_fixture(tmp.path(), "bad.toml", "burst_threshold = \"many\"\n");

    cmd()
        .current_dir(tmp.path())
        .args(["--config", path_str(&config), "score", path_str(&input)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid TOML config"));
}

#[test]
fn test_snapshot_dedupes_same_user() {
    let tmp = TempDir::new().expect("tmp");
    let first = write_fixture(tmp.path(), "one.json", STEADY_PROFILE);
    let second = write_fixture(tmp.path(), "two.json", STEADY_PROFILE);

    let output = cmd()
        .current_dir(tmp.path())
        .args(["snapshot", path_str(&first), path_str(&second)])
        .output()
        .expect("run snapshot");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1);
    let snapshot: Value = serde_json::from_str(lines[0]).expect("json line");
    assert_eq!(snapshot["handle"], "octocat");
    assert_eq!(snapshot["commitsTotal"], 640);
    assert!(snapshot.get("heatmapData").is_none());
}

#[test]
fn test_batch_scores_directory() {
    let tmp = TempDir::new().expect("tmp");
    let inputs = tmp.path().join("profiles");
    fs::create_dir_all(&inputs).expect("mkdir");
    write_fixture(&inputs, "octocat.json", STEADY_PROFILE);
    write_fixture(&inputs, "newcomer.json", r#"{"login":"newcomer"}"#);

    let output = cmd()
        .current_dir(tmp.path())
        .args(["batch", path_str(&inputs)])
        .output()
        .expect("run batch");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf8");
    let rows: Vec<Value> =
        stdout.lines().map(|l| serde_json::from_str(l).expect("json line")).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["handle"], "newcomer");
    assert_eq!(rows[0]["tier"], "Emerging");
    assert_eq!(rows[1]["handle"], "octocat");
}

#[test]
fn test_batch_reports_failures_without_dropping_good_rows() {
    let tmp = TempDir::new().expect("tmp");
    let good = write_fixture(tmp.path(), "good.json", STEADY_PROFILE);
    let bad = write_fixture(tmp.path(), "bad.json", "not json");

    cmd()
        .current_dir(tmp.path())
        .args(["batch", path_str(&good), path_str(&bad)])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"handle\":\"octocat\""))
        .stderr(predicate::str::contains("bad.json"))
        .stderr(predicate::str::contains("1 of 2 contribution files failed to score"));
}
