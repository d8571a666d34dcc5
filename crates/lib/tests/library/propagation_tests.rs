use modplan_lib::descriptor::{ModuleDescriptor, TargetDescriptor, TargetType};
use modplan_lib::platform::PlatformId;
use modplan_lib::{BuildPlan, ResolveOptions, resolve_plan};

use super::common::store;

fn plan(roots: &[&str]) -> BuildPlan {
  let store = store(vec![
    ModuleDescriptor::new("A")
      .with_public_dependencies(["B"])
      .with_public_include_paths(["A/Public"])
      .with_definitions(["WITH_A=1"]),
    ModuleDescriptor::new("B")
      .with_public_include_paths(["B/Public"])
      .with_definitions(["WITH_B=1"]),
    ModuleDescriptor::new("C")
      .with_private_dependencies(["B"])
      .with_public_include_paths(["C/Public"])
      .with_definitions(["WITH_C=1"]),
    ModuleDescriptor::new("D").with_public_dependencies(["A"]),
    ModuleDescriptor::new("E").with_public_dependencies(["C"]),
  ]);
  let target = TargetDescriptor::new("T", TargetType::Game, roots.iter().copied());
  resolve_plan(&store, &target, PlatformId::Linux, &ResolveOptions::default()).unwrap()
}

#[test]
fn public_dependency_include_paths_reach_the_dependent() {
  let plan = plan(&["A", "C"]);
  assert_eq!(plan.module("A").unwrap().include_paths, vec!["A/Public", "B/Public"]);
}

#[test]
fn private_dependency_include_paths_reach_the_dependent() {
  let plan = plan(&["A", "C"]);
  assert_eq!(plan.module("C").unwrap().include_paths, vec!["C/Public", "B/Public"]);
}

#[test]
fn public_chain_propagates_transitively() {
  let plan = plan(&["A", "C", "D"]);
  let d = plan.module("D").unwrap();

  assert!(d.include_paths.contains(&"A/Public".to_string()));
  assert!(d.include_paths.contains(&"B/Public".to_string()));
  assert!(!d.include_paths.contains(&"C/Public".to_string()));
  assert_eq!(d.definitions, vec!["WITH_A=1", "WITH_B=1"]);
}

#[test]
fn private_dependency_does_not_propagate_further() {
  let plan = plan(&["E"]);
  let e = plan.module("E").unwrap();

  assert_eq!(e.include_paths, vec!["C/Public"]);
  assert_eq!(e.definitions, vec!["WITH_C=1"]);
}

#[test]
fn plan_level_lists_are_deduplicated_unions() {
  let plan = plan(&["A", "C", "D"]);

  assert_eq!(plan.include_paths(), ["B/Public", "A/Public", "C/Public"]);
  assert_eq!(plan.definitions(), ["WITH_B=1", "WITH_A=1", "WITH_C=1"]);
}
