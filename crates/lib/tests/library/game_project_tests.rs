use modplan_lib::descriptor::{PchMode, RuntimeDependency, TargetType};
use modplan_lib::platform::PlatformId;
use modplan_lib::{ResolveOptions, resolve_plan, resolve_plans};

use super::common::{BOOST_LIBRARIES, editor_target, game_project, game_target};

#[test]
fn win64_links_boost_import_libraries_once() {
  let plan = resolve_plan(&game_project(), &game_target(), PlatformId::Win64, &ResolveOptions::default()).unwrap();

  let expected: Vec<String> = BOOST_LIBRARIES
    .iter()
    .map(|lib| format!("Source/LocalBoost/lib/boost_{}-vc143-mt-x64-1_81.lib", lib))
    .collect();
  assert_eq!(plan.link_libraries(), expected.as_slice());
}

#[test]
fn win64_stages_boost_dlls_next_to_binary() {
  let plan = resolve_plan(&game_project(), &game_target(), PlatformId::Win64, &ResolveOptions::default()).unwrap();

  assert_eq!(plan.runtime_dependencies().len(), BOOST_LIBRARIES.len());
  assert_eq!(
    plan.runtime_dependencies()[0],
    RuntimeDependency::new(
      "$(TargetOutputDir)/boost_atomic-vc143-mt-x64-1_81.dll",
      "Source/LocalBoost/lib/boost_atomic-vc143-mt-x64-1_81.dll",
    )
  );
}

#[test]
fn mac_uses_universal_archives_and_dylibs() {
  let plan = resolve_plan(&game_project(), &game_target(), PlatformId::Mac, &ResolveOptions::default()).unwrap();

  assert_eq!(plan.link_libraries()[0], "Source/LocalBoost/lib/Mac/libboost_atomic-mt.a");
  assert_eq!(
    plan.runtime_dependencies()[2].source,
    "Source/LocalBoost/lib/Mac/libboost_thread-mt.dylib"
  );
}

#[test]
fn linux_plan_has_no_boost_artifacts() {
  let plan = resolve_plan(&game_project(), &game_target(), PlatformId::Linux, &ResolveOptions::default()).unwrap();

  assert!(plan.link_libraries().is_empty());
  assert!(plan.runtime_dependencies().is_empty());
  assert!(plan.definitions().contains(&"BOOST_ALL_NO_LIB".to_string()));
}

#[test]
fn steam_subsystem_is_a_runtime_plugin() {
  let plan = resolve_plan(&game_project(), &game_target(), PlatformId::Win64, &ResolveOptions::default()).unwrap();

  assert!(plan.dynamic_modules().contains("OnlineSubsystemSteam"));
  assert!(plan.module("OnlineSubsystemSteam").is_none());
  assert!(!plan.link_libraries().iter().any(|l| l.contains("steam_api64")));
}

#[test]
fn boost_definitions_stay_private_to_its_users() {
  let plan = resolve_plan(&game_project(), &game_target(), PlatformId::Win64, &ResolveOptions::default()).unwrap();

  let game = plan.module("Game").unwrap();
  assert!(game.definitions.contains(&"BOOST_ALL_NO_LIB".to_string()));

  let global = plan.module("GameGlobal").unwrap();
  assert!(global.definitions.is_empty());
}

#[test]
fn compile_settings_are_carried_through() {
  let plan = resolve_plan(&game_project(), &editor_target(), PlatformId::Win64, &ResolveOptions::default()).unwrap();

  let game = plan.module("Game").unwrap();
  assert_eq!(game.pch_mode, PchMode::UseExplicitOrSharedPchs);
  assert!(game.settings.enable_exceptions);
  assert!(!game.settings.undefined_identifier_warnings);
  assert!(plan.module("GameTesting").unwrap().settings.use_unity);
}

#[test]
fn editor_target_adds_editor_modules() {
  let store = game_project();
  let game = resolve_plan(&store, &game_target(), PlatformId::Win64, &ResolveOptions::default()).unwrap();
  let editor = resolve_plan(&store, &editor_target(), PlatformId::Win64, &ResolveOptions::default()).unwrap();

  assert_eq!(editor.target_type(), TargetType::Editor);
  assert!(game.module("UnrealEd").is_none());
  assert!(editor.module("UnrealEd").is_some());
  assert!(editor.module("GameTesting").is_some());
}

#[test]
fn all_platforms_resolve_in_parallel() {
  let store = game_project();
  let results = resolve_plans(&store, &editor_target(), &PlatformId::ALL, &ResolveOptions::default());

  assert_eq!(results.len(), PlatformId::ALL.len());
  for (platform, result) in results {
    let plan = result.unwrap();
    let sequential = resolve_plan(&store, &editor_target(), platform, &ResolveOptions::default()).unwrap();
    assert_eq!(plan, sequential);
  }
}
