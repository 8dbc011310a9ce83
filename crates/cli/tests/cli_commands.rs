use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;
use varpair::read_collected_functions;

mod helpers;
use helpers::{sample_function, write_fixture};

#[test]
fn version_is_the_default_command() {
    Command::cargo_bin("varpair")
        .unwrap()
        .assert()
        .success()
        .stdout(predicate::str::contains("varpair-core v"));
}

#[test]
fn inspect_prints_text_summary() {
    let temp = tempdir().unwrap();
    let input = write_fixture(temp.path(), &[sample_function("parse_args", 0x1140, true)]);

    Command::cargo_bin("varpair")
        .unwrap()
        .args(["inspect", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Collected functions (1):"))
        .stdout(predicate::str::contains("parse_args"))
        .stdout(predicate::str::contains("user names: true"))
        .stdout(predicate::str::contains("sub_1140"));
}

#[test]
fn inspect_json_reports_derived_views() {
    let temp = tempdir().unwrap();
    let input = write_fixture(temp.path(), &[sample_function("main", 0x1000, false)]);

    let output = Command::cargo_bin("varpair")
        .unwrap()
        .args(["inspect", "--json", "--input"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["name"], "main");
    assert_eq!(value[0]["debug"]["locations"], 2);
    assert_eq!(value[0]["debug"]["has_user_names"], false);
    assert_eq!(value[0]["decompiler"]["name"], "sub_1000");
}

#[test]
fn filter_writes_only_admitted_functions() {
    let temp = tempdir().unwrap();
    let input = write_fixture(
        temp.path(),
        &[
            sample_function("keep_me", 0x1000, true),
            sample_function("drop_me", 0x2000, false),
        ],
    );
    let out = temp.path().join("admitted.json");

    Command::cargo_bin("varpair")
        .unwrap()
        .args(["filter", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("Admitted 1 of 2 functions"))
        .stderr(predicate::str::contains("no_user_names: 1"));

    let admitted = read_collected_functions(&out).expect("read admitted");
    assert_eq!(admitted.len(), 1);
    assert_eq!(admitted[0].name(), "keep_me");
}

#[test]
fn filter_json_report_lists_rejections() {
    let temp = tempdir().unwrap();
    let input = write_fixture(temp.path(), &[sample_function("f", 0x1000, true)]);
    let policy = temp.path().join("policy.json");
    std::fs::write(&policy, r#"{ "max_raw_code_bytes": 4 }"#).unwrap();
    let out = temp.path().join("admitted.json");

    let output = Command::cargo_bin("varpair")
        .unwrap()
        .args(["filter", "--json", "--input"])
        .arg(&input)
        .arg("--policy")
        .arg(&policy)
        .arg("--output")
        .arg(&out)
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total"], 1);
    assert_eq!(report["admitted"], 0);
    assert_eq!(report["rejected"][0]["name"], "f");
    assert_eq!(report["rejected"][0]["rejection"]["reason"], "raw_code_too_large");
    assert_eq!(report["by_reason"]["raw_code_too_large"], 1);
}

#[test]
fn filter_without_output_prints_admitted_json() {
    let temp = tempdir().unwrap();
    let input = write_fixture(temp.path(), &[sample_function("f", 0x1000, true)]);

    let output = Command::cargo_bin("varpair")
        .unwrap()
        .args(["filter", "--input"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let admitted: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(admitted.as_array().map(Vec::len), Some(1));
    assert_eq!(admitted[0]["name"], "f");
}

#[test]
fn default_policy_writes_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("policy.json");

    Command::cargo_bin("varpair")
        .unwrap()
        .args(["default-policy", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default admission policy"));

    let body = std::fs::read_to_string(&path).unwrap();
    assert!(body.contains("\"require_user_names\": true"));
}
