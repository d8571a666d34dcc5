use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::descriptor::{
  BuildSettingsVersion, CompileSettings, IncludeOrderVersion, ModuleKind, PchMode, RuntimeDependency, TargetType,
};
use crate::platform::PlatformId;
use crate::util::hash::{HashError, Hashable, ObjectHash};

/// Compile inputs for one module of the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedModule {
  pub name: String,
  pub kind: ModuleKind,
  /// The module's own include paths followed by those propagated from its
  /// dependencies' public interfaces.
  pub include_paths: Vec<String>,
  pub definitions: Vec<String>,
  /// Libraries declared by this module for the platform.
  pub libraries: Vec<String>,
  pub pch_mode: PchMode,
  pub settings: CompileSettings,
}

/// A resolved, platform-specialized build plan.
///
/// Built by [`emit`](super::emit) and never mutated afterwards; fields are
/// read through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildPlan {
  pub(super) target: String,
  pub(super) target_type: TargetType,
  pub(super) build_settings_version: BuildSettingsVersion,
  pub(super) include_order_version: IncludeOrderVersion,
  pub(super) platform: PlatformId,
  pub(super) modules: Vec<PlannedModule>,
  pub(super) include_paths: Vec<String>,
  pub(super) definitions: Vec<String>,
  pub(super) link_libraries: Vec<String>,
  pub(super) dynamic_modules: BTreeSet<String>,
  pub(super) runtime_dependencies: Vec<RuntimeDependency>,
}

impl Hashable for BuildPlan {}

impl BuildPlan {
  pub fn target(&self) -> &str {
    &self.target
  }

  pub fn target_type(&self) -> TargetType {
    self.target_type
  }

  pub fn build_settings_version(&self) -> BuildSettingsVersion {
    self.build_settings_version
  }

  pub fn include_order_version(&self) -> IncludeOrderVersion {
    self.include_order_version
  }

  pub fn platform(&self) -> PlatformId {
    self.platform
  }

  /// Planned modules in build order.
  pub fn modules(&self) -> &[PlannedModule] {
    &self.modules
  }

  pub fn module(&self, name: &str) -> Option<&PlannedModule> {
    self.modules.iter().find(|m| m.name == name)
  }

  /// Module names in build order.
  pub fn order(&self) -> Vec<&str> {
    self.modules.iter().map(|m| m.name.as_str()).collect()
  }

  /// Every include path used by any module, first occurrence first.
  pub fn include_paths(&self) -> &[String] {
    &self.include_paths
  }

  pub fn definitions(&self) -> &[String] {
    &self.definitions
  }

  /// De-duplicated libraries in link order (dependencies before dependents).
  pub fn link_libraries(&self) -> &[String] {
    &self.link_libraries
  }

  /// Modules loaded as plugins at runtime rather than linked.
  pub fn dynamic_modules(&self) -> &BTreeSet<String> {
    &self.dynamic_modules
  }

  pub fn runtime_dependencies(&self) -> &[RuntimeDependency] {
    &self.runtime_dependencies
  }

  /// Content hash of the serialized plan. Equal plans hash equally.
  pub fn fingerprint(&self) -> Result<ObjectHash, HashError> {
    self.compute_hash()
  }
}
