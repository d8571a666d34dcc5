//! Target descriptors: which modules a build includes and for what purpose.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetType {
  /// A shippable standalone application.
  #[default]
  Game,
  /// The application plus editor-only modules.
  Editor,
  Client,
  Server,
  Program,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BuildSettingsVersion {
  V1,
  V2,
  V3,
  V4,
  #[default]
  V5,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncludeOrderVersion {
  Oldest,
  #[default]
  Latest,
}

/// A top-level build configuration.
///
/// Fields are private: a target is immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetDescriptor {
  name: String,
  #[serde(default)]
  target_type: TargetType,
  #[serde(default)]
  extra_modules: Vec<String>,
  #[serde(default)]
  build_settings_version: BuildSettingsVersion,
  #[serde(default)]
  include_order_version: IncludeOrderVersion,
}

impl TargetDescriptor {
  pub fn new<I, S>(name: impl Into<String>, target_type: TargetType, extra_modules: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      name: name.into(),
      target_type,
      extra_modules: extra_modules.into_iter().map(Into::into).collect(),
      build_settings_version: BuildSettingsVersion::default(),
      include_order_version: IncludeOrderVersion::default(),
    }
  }

  pub fn with_build_settings_version(mut self, version: BuildSettingsVersion) -> Self {
    self.build_settings_version = version;
    self
  }

  pub fn with_include_order_version(mut self, version: IncludeOrderVersion) -> Self {
    self.include_order_version = version;
    self
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn target_type(&self) -> TargetType {
    self.target_type
  }

  /// Root modules of the build, in declaration order.
  pub fn extra_modules(&self) -> &[String] {
    &self.extra_modules
  }

  pub fn build_settings_version(&self) -> BuildSettingsVersion {
    self.build_settings_version
  }

  pub fn include_order_version(&self) -> IncludeOrderVersion {
    self.include_order_version
  }
}
