//! Check command integration tests.

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn check_passes_in_permissive_mode() {
  let env = TestEnv::from_fixture("game.json");

  env
    .modplan_cmd()
    .arg("check")
    .assert()
    .success()
    .stdout(predicate::str::contains("Checked 2 targets across 4 platforms"));
}

#[test]
fn check_strict_reports_failures() {
  let env = TestEnv::from_fixture("game.json");

  env
    .modplan_cmd()
    .args(["check", "--strict"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("4 of 8 resolutions failed"));
}

#[test]
fn check_strict_json_marks_each_resolution() {
  let env = TestEnv::from_fixture("game.json");

  let output = env.modplan_cmd().args(["check", "--strict", "-o", "json"]).output().unwrap();
  assert!(!output.status.success());

  let entries: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(entries.len(), 8);
  let failed: Vec<&str> = entries
    .iter()
    .filter(|e| e["ok"] == false)
    .map(|e| e["platform"].as_str().unwrap())
    .collect();
  assert_eq!(failed, ["Linux", "LinuxArm64", "Linux", "LinuxArm64"]);
}

#[test]
fn check_reports_invalid_descriptor() {
  let env = TestEnv::from_content(r#"{ "modules": [ { "name": "Core", "public_dependencies": ["Core"] } ] }"#);

  env.modplan_cmd().arg("check").assert().failure();
}

#[test]
fn project_flag_overrides_env() {
  let env = TestEnv::from_fixture("game.json");

  env
    .modplan_cmd()
    .env("MODPLAN_PROJECT", env.temp.path().join("missing.json"))
    .args(["--project"])
    .arg(&env.project_path)
    .arg("check")
    .assert()
    .success();
}
