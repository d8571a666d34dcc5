//! Build plan emission.

use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::{debug, info};

use crate::descriptor::TargetDescriptor;
use crate::error::{PlanError, Result};
use crate::graph::{interface_closures, visible_modules};
use crate::platform::PlatformId;
use crate::specialize::ResolvedModule;

use super::types::{BuildPlan, PlannedModule};

/// Ordered collection that keeps the first occurrence of each value.
#[derive(Default)]
struct FirstWins {
  seen: HashSet<String>,
  items: Vec<String>,
}

impl FirstWins {
  fn push(&mut self, item: &str) {
    if !self.seen.contains(item) {
      self.seen.insert(item.to_string());
      self.items.push(item.to_string());
    }
  }

  fn extend<'a>(&mut self, items: impl IntoIterator<Item = &'a String>) {
    for item in items {
      self.push(item);
    }
  }

  fn into_vec(self) -> Vec<String> {
    self.items
  }
}

/// Merge resolved modules, given in build order, into a build plan.
///
/// # Errors
///
/// Returns `UnknownModule` if a module refers to a dependency that does not
/// appear earlier in `ordered`, and `UnresolvedPlatform` if a module was
/// specialized for a different platform.
pub fn emit(ordered: &[ResolvedModule], target: &TargetDescriptor, platform: PlatformId) -> Result<BuildPlan> {
  if let Some(m) = ordered.iter().find(|m| m.platform != platform) {
    return Err(PlanError::UnresolvedPlatform {
      module: m.name.clone(),
      platform,
      reason: format!("module was specialized for {}", m.platform),
    });
  }

  let closures = interface_closures(
    ordered
      .iter()
      .map(|m| (m.name.as_str(), m.public_dependencies.as_slice())),
  )?;
  let by_name: HashMap<&str, &ResolvedModule> = ordered.iter().map(|m| (m.name.as_str(), m)).collect();

  let dynamic_modules: BTreeSet<String> = ordered
    .iter()
    .flat_map(|m| m.dynamically_loaded_modules.iter().cloned())
    .collect();

  let mut modules = Vec::with_capacity(ordered.len());
  let mut all_includes = FirstWins::default();
  let mut all_definitions = FirstWins::default();
  let mut link_libraries = FirstWins::default();
  let mut runtime_dependencies = Vec::new();

  for module in ordered {
    let mut includes = FirstWins::default();
    let mut definitions = FirstWins::default();
    includes.extend(&module.public_include_paths);
    includes.extend(&module.private_include_paths);
    definitions.extend(&module.definitions);
    definitions.extend(&module.private_definitions);

    // Private dependencies contribute their interface to this module only;
    // they never enter `closures`, so they do not reach dependents.
    let visible = visible_modules(&closures, &module.name, &module.private_dependencies)?;
    for name in visible.iter().skip(1) {
      let dep = by_name[name.as_str()];
      includes.extend(&dep.public_include_paths);
      definitions.extend(&dep.definitions);
    }

    let include_paths = includes.into_vec();
    let definitions = definitions.into_vec();
    all_includes.extend(&include_paths);
    all_definitions.extend(&definitions);

    // Modules only reached through a dynamic load never enter `ordered`, so
    // everything here is linked statically by some dependent or root.
    if dynamic_modules.contains(&module.name) {
      debug!(module = %module.name, "dynamically loaded module is also a static dependency");
    }
    link_libraries.extend(&module.libraries);
    runtime_dependencies.extend(module.runtime_dependencies.iter().cloned());

    modules.push(PlannedModule {
      name: module.name.clone(),
      kind: module.kind,
      include_paths,
      definitions,
      libraries: module.libraries.clone(),
      pch_mode: module.pch_mode,
      settings: module.settings,
    });
  }

  let plan = BuildPlan {
    target: target.name().to_string(),
    target_type: target.target_type(),
    build_settings_version: target.build_settings_version(),
    include_order_version: target.include_order_version(),
    platform,
    modules,
    include_paths: all_includes.into_vec(),
    definitions: all_definitions.into_vec(),
    link_libraries: link_libraries.into_vec(),
    dynamic_modules,
    runtime_dependencies,
  };

  info!(
    target = plan.target(),
    %platform,
    modules = plan.modules().len(),
    libraries = plan.link_libraries().len(),
    runtime = plan.runtime_dependencies().len(),
    "emitted build plan"
  );

  Ok(plan)
}
