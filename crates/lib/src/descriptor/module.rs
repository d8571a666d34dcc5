//! Module descriptors: one declared compilation unit.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::platform::PlatformId;

use super::library::{LibrarySpec, RuntimeDependency};

/// Whether a module is compiled from source or wraps prebuilt binaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModuleKind {
  #[default]
  Internal,
  External,
}

/// Precompiled header usage for a module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PchMode {
  #[default]
  Default,
  UseSharedPchs,
  UseExplicitOrSharedPchs,
  NoPch,
}

/// Per-module compiler switches, passed through to the plan untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompileSettings {
  pub enable_exceptions: bool,
  pub undefined_identifier_warnings: bool,
  pub use_unity: bool,
}

impl Default for CompileSettings {
  fn default() -> Self {
    Self {
      enable_exceptions: false,
      undefined_identifier_warnings: true,
      use_unity: false,
    }
  }
}

/// The declared metadata of a single module.
///
/// Dependency, include-path and definition lists keep their declaration order;
/// the resolver relies on it to produce a reproducible build order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleDescriptor {
  pub name: String,
  #[serde(default)]
  pub kind: ModuleKind,
  #[serde(default)]
  pub public_dependencies: Vec<String>,
  #[serde(default)]
  pub private_dependencies: Vec<String>,
  #[serde(default)]
  pub public_include_paths: Vec<String>,
  #[serde(default)]
  pub private_include_paths: Vec<String>,
  /// Public preprocessor definitions, propagated like public include paths.
  #[serde(default)]
  pub definitions: Vec<String>,
  #[serde(default)]
  pub private_definitions: Vec<String>,
  #[serde(default)]
  pub additional_libraries: BTreeMap<PlatformId, Vec<LibrarySpec>>,
  #[serde(default)]
  pub runtime_dependencies: BTreeMap<PlatformId, Vec<RuntimeDependency>>,
  /// Modules loaded as plugins at runtime instead of being linked.
  #[serde(default)]
  pub dynamically_loaded_modules: Vec<String>,
  #[serde(default)]
  pub pch_mode: PchMode,
  #[serde(default)]
  pub settings: CompileSettings,
}

fn owned<I, S>(items: I) -> Vec<String>
where
  I: IntoIterator<Item = S>,
  S: Into<String>,
{
  items.into_iter().map(Into::into).collect()
}

impl ModuleDescriptor {
  /// Create an internal module with no dependencies.
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      kind: ModuleKind::Internal,
      public_dependencies: Vec::new(),
      private_dependencies: Vec::new(),
      public_include_paths: Vec::new(),
      private_include_paths: Vec::new(),
      definitions: Vec::new(),
      private_definitions: Vec::new(),
      additional_libraries: BTreeMap::new(),
      runtime_dependencies: BTreeMap::new(),
      dynamically_loaded_modules: Vec::new(),
      pch_mode: PchMode::Default,
      settings: CompileSettings::default(),
    }
  }

  /// Create an external (prebuilt) module.
  pub fn external(name: impl Into<String>) -> Self {
    Self {
      kind: ModuleKind::External,
      ..Self::new(name)
    }
  }

  pub fn with_public_dependencies<I, S>(mut self, deps: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.public_dependencies = owned(deps);
    self
  }

  pub fn with_private_dependencies<I, S>(mut self, deps: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.private_dependencies = owned(deps);
    self
  }

  pub fn with_public_include_paths<I, S>(mut self, paths: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.public_include_paths = owned(paths);
    self
  }

  pub fn with_private_include_paths<I, S>(mut self, paths: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.private_include_paths = owned(paths);
    self
  }

  pub fn with_definitions<I, S>(mut self, definitions: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.definitions = owned(definitions);
    self
  }

  pub fn with_private_definitions<I, S>(mut self, definitions: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.private_definitions = owned(definitions);
    self
  }

  pub fn with_libraries(mut self, platform: PlatformId, libraries: Vec<LibrarySpec>) -> Self {
    self.additional_libraries.insert(platform, libraries);
    self
  }

  pub fn with_runtime_dependencies(mut self, platform: PlatformId, deps: Vec<RuntimeDependency>) -> Self {
    self.runtime_dependencies.insert(platform, deps);
    self
  }

  pub fn with_dynamically_loaded_modules<I, S>(mut self, modules: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.dynamically_loaded_modules = owned(modules);
    self
  }

  pub fn with_pch_mode(mut self, pch_mode: PchMode) -> Self {
    self.pch_mode = pch_mode;
    self
  }

  pub fn with_settings(mut self, settings: CompileSettings) -> Self {
    self.settings = settings;
    self
  }

  /// All dependencies in traversal order: public first, then private.
  pub fn dependencies(&self) -> impl Iterator<Item = &str> {
    self
      .public_dependencies
      .iter()
      .chain(self.private_dependencies.iter())
      .map(String::as_str)
  }

  /// Check the descriptor on its own, without looking at other modules.
  ///
  /// Dependency existence is not checked here; that happens during resolution
  /// so descriptors can be registered in any order.
  pub fn validate(&self) -> Result<()> {
    if self.name.trim().is_empty() {
      return Err(PlanError::invalid_descriptor(&self.name, "module name is empty"));
    }

    check_unique(&self.name, "public dependency", &self.public_dependencies)?;
    check_unique(&self.name, "private dependency", &self.private_dependencies)?;
    check_unique(&self.name, "dynamically loaded module", &self.dynamically_loaded_modules)?;
    check_unique(&self.name, "public include path", &self.public_include_paths)?;
    check_unique(&self.name, "private include path", &self.private_include_paths)?;

    for dep in self.dependencies().chain(self.dynamically_loaded_modules.iter().map(String::as_str)) {
      if dep.trim().is_empty() {
        return Err(PlanError::invalid_descriptor(&self.name, "dependency name is empty"));
      }
      if dep == self.name {
        return Err(PlanError::invalid_descriptor(&self.name, "module depends on itself"));
      }
    }

    let public: HashSet<&str> = self.public_dependencies.iter().map(String::as_str).collect();
    if let Some(both) = self.private_dependencies.iter().find(|d| public.contains(d.as_str())) {
      return Err(PlanError::invalid_descriptor(
        &self.name,
        format!("'{}' is declared as both a public and a private dependency", both),
      ));
    }

    Ok(())
  }
}

fn check_unique(module: &str, what: &str, names: &[String]) -> Result<()> {
  let mut seen = HashSet::new();
  for name in names {
    if !seen.insert(name.as_str()) {
      return Err(PlanError::invalid_descriptor(
        module,
        format!("{} '{}' is listed more than once", what, name),
      ));
    }
  }
  Ok(())
}
