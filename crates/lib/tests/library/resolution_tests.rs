use modplan_lib::descriptor::{LibrarySpec, ModuleDescriptor, TargetDescriptor, TargetType};
use modplan_lib::graph::resolve_order;
use modplan_lib::platform::PlatformId;
use modplan_lib::util::hash::Hashable;
use modplan_lib::{ModuleStore, PlanError, ResolveOptions, resolve_plan};

use super::common::{assert_topological, editor_target, game_project, store};

#[test]
fn order_places_dependencies_first() {
  let store = game_project();
  let resolution = resolve_order(&store, editor_target().extra_modules()).unwrap();

  assert_topological(&store, resolution.order());
  assert_eq!(resolution.order().last().map(String::as_str), Some("GameTesting"));
}

#[test]
fn cycle_fails_and_breaking_it_succeeds() {
  let cyclic = store(vec![
    ModuleDescriptor::new("A").with_public_dependencies(["B"]),
    ModuleDescriptor::new("B").with_private_dependencies(["A"]),
  ]);
  assert!(matches!(
    resolve_order(&cyclic, &["A"]),
    Err(PlanError::CyclicDependency { .. })
  ));

  let fixed = store(vec![
    ModuleDescriptor::new("A").with_public_dependencies(["B"]),
    ModuleDescriptor::new("B"),
  ]);
  assert_eq!(resolve_order(&fixed, &["A"]).unwrap().order(), ["B", "A"]);
}

#[test]
fn unknown_dependency_is_named_exactly() {
  let store = store(vec![
    ModuleDescriptor::new("Game").with_public_dependencies(["Engine"]),
    ModuleDescriptor::new("Engine").with_private_dependencies(["Niagara"]),
  ]);

  match resolve_order(&store, &["Game"]) {
    Err(PlanError::UnknownModule { name, referrer }) => {
      assert_eq!(name, "Niagara");
      assert_eq!(referrer.as_deref(), Some("Engine"));
    }
    other => panic!("expected UnknownModule, got {:?}", other),
  }
}

#[test]
fn duplicate_registration_is_rejected() {
  let mut store = ModuleStore::new();
  store.register(ModuleDescriptor::new("Core")).unwrap();

  let err = store.register(ModuleDescriptor::new("Core")).unwrap_err();
  assert_eq!(err, PlanError::DuplicateModule { name: "Core".to_string() });
  assert_eq!(store.len(), 1);
}

#[test]
fn core_engine_game_on_win64() {
  let store = store(vec![
    ModuleDescriptor::new("Core").with_libraries(PlatformId::Win64, vec![LibrarySpec::new("Core")]),
    ModuleDescriptor::new("Engine")
      .with_public_dependencies(["Core"])
      .with_libraries(PlatformId::Win64, vec![LibrarySpec::new("Engine")]),
    ModuleDescriptor::new("Game")
      .with_public_dependencies(["Engine"])
      .with_libraries(PlatformId::Win64, vec![LibrarySpec::new("Game"), LibrarySpec::new("Core")]),
  ]);
  let target = TargetDescriptor::new("Game", TargetType::Game, ["Game"]);

  let plan = resolve_plan(&store, &target, PlatformId::Win64, &ResolveOptions::default()).unwrap();
  assert_eq!(plan.order(), vec!["Core", "Engine", "Game"]);
  assert_eq!(plan.link_libraries(), ["Core.lib", "Engine.lib", "Game.lib"]);
}

#[test]
fn resolution_is_deterministic() {
  let store = game_project();
  let target = editor_target();

  for platform in PlatformId::ALL {
    let first = resolve_plan(&store, &target, platform, &ResolveOptions::default()).unwrap();
    let second = resolve_plan(&store, &target, platform, &ResolveOptions::default()).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.compute_hash().unwrap(), second.fingerprint().unwrap());
  }
}

#[test]
fn plans_differ_between_platforms() {
  let store = game_project();
  let target = editor_target();

  let win = resolve_plan(&store, &target, PlatformId::Win64, &ResolveOptions::default()).unwrap();
  let mac = resolve_plan(&store, &target, PlatformId::Mac, &ResolveOptions::default()).unwrap();
  assert_eq!(win.order(), mac.order());
  assert_ne!(win.fingerprint().unwrap(), mac.fingerprint().unwrap());
}

#[test]
fn strict_policy_fails_whole_resolution() {
  let store = game_project();
  let target = editor_target();

  let result = resolve_plan(&store, &target, PlatformId::Linux, &ResolveOptions::strict());
  match result {
    Err(PlanError::UnresolvedPlatform { module, platform, .. }) => {
      assert_eq!(module, "LocalBoost");
      assert_eq!(platform, PlatformId::Linux);
    }
    other => panic!("expected UnresolvedPlatform, got {:?}", other),
  }

  assert!(resolve_plan(&store, &target, PlatformId::Linux, &ResolveOptions::default()).is_ok());
}

#[test]
fn dynamically_loaded_static_dependency_stays_linked() {
  let store = store(vec![
    ModuleDescriptor::new("Net").with_libraries(PlatformId::Win64, vec![LibrarySpec::new("net")]),
    ModuleDescriptor::new("Engine").with_public_dependencies(["Net"]),
    ModuleDescriptor::new("Game")
      .with_public_dependencies(["Engine"])
      .with_dynamically_loaded_modules(["Net"]),
  ]);
  let target = TargetDescriptor::new("Game", TargetType::Game, ["Game"]);

  let plan = resolve_plan(&store, &target, PlatformId::Win64, &ResolveOptions::default()).unwrap();
  assert_eq!(plan.order(), vec!["Net", "Engine", "Game"]);
  assert_eq!(plan.link_libraries(), ["net.lib"]);
  assert!(plan.dynamic_modules().contains("Net"));
}

#[test]
fn misspelled_dynamic_module_fails_resolution() {
  let store = store(vec![
    ModuleDescriptor::new("OnlineSubsystemSteam"),
    ModuleDescriptor::new("Game").with_dynamically_loaded_modules(["OnlineSubsystemStem"]),
  ]);
  let target = TargetDescriptor::new("Game", TargetType::Game, ["Game"]);

  let err = resolve_plan(&store, &target, PlatformId::Win64, &ResolveOptions::default()).unwrap_err();
  assert_eq!(err, PlanError::unknown_module("OnlineSubsystemStem", Some("Game")));
}
