//! Order and graph command integration tests.

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn order_prints_dependencies_first() {
  let env = TestEnv::from_fixture("game.json");

  env
    .modplan_cmd()
    .args(["order", "Game"])
    .assert()
    .success()
    .stdout(predicate::str::contains("1. Core"))
    .stdout(predicate::str::contains("2. Engine"))
    .stdout(predicate::str::contains("3. Boost"))
    .stdout(predicate::str::contains("4. Game"));
}

#[test]
fn order_json() {
  let env = TestEnv::from_fixture("game.json");

  let output = env.modplan_cmd().args(["order", "GameEditor", "-o", "json"]).output().unwrap();
  assert!(output.status.success());

  let order: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(order, ["Core", "Engine", "Boost", "Game"]);
}

#[test]
fn order_does_not_include_dynamic_modules() {
  let env = TestEnv::from_fixture("game.json");

  env
    .modplan_cmd()
    .args(["order", "Game"])
    .assert()
    .success()
    .stdout(predicate::str::contains("OnlineSubsystemSteam").not());
}

#[test]
fn graph_prints_dot() {
  let env = TestEnv::from_fixture("game.json");

  env
    .modplan_cmd()
    .args(["graph", "Game"])
    .assert()
    .success()
    .stdout(predicate::str::starts_with("digraph"))
    .stdout(predicate::str::contains("private"));
}
