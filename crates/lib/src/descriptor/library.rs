//! Library templates and runtime staging entries.

use serde::{Deserialize, Serialize};

/// How the architecture component of a library name is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArchQualifier {
  /// Use the target platform's own architecture tag (`x64`, `arm64`).
  Platform,
  /// Use this exact text.
  Literal(String),
}

/// Optional name components appended to a library's base name.
///
/// Present components are joined in field order: toolset, threading,
/// architecture, version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LibraryQualifiers {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub toolset: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub threading: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub arch: Option<ArchQualifier>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub version: Option<String>,
}

impl LibraryQualifiers {
  pub fn with_toolset(mut self, toolset: impl Into<String>) -> Self {
    self.toolset = Some(toolset.into());
    self
  }

  pub fn with_threading(mut self, threading: impl Into<String>) -> Self {
    self.threading = Some(threading.into());
    self
  }

  pub fn with_arch(mut self, arch: ArchQualifier) -> Self {
    self.arch = Some(arch);
    self
  }

  pub fn with_version(mut self, version: impl Into<String>) -> Self {
    self.version = Some(version.into());
    self
  }
}

/// Which file the linker is handed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
  /// A static archive (`.a`, `.lib`).
  #[default]
  Static,
  /// A shared library, linked through its import library on Windows.
  Shared,
}

/// A templated library declaration, resolved to concrete file names per platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LibrarySpec {
  /// Base name without prefix, qualifiers or extension (e.g. `boost_atomic`).
  pub name: String,
  /// Directory holding the library files. Empty means the linker search path.
  #[serde(default)]
  pub directory: String,
  #[serde(default)]
  pub qualifiers: LibraryQualifiers,
  #[serde(default)]
  pub link: LinkKind,
  /// Stage the paired shared library next to the produced binary.
  #[serde(default)]
  pub stage_runtime: bool,
  /// An optional library is skipped, not an error, when its name cannot be synthesized.
  #[serde(default)]
  pub optional: bool,
}

impl LibrarySpec {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      directory: String::new(),
      qualifiers: LibraryQualifiers::default(),
      link: LinkKind::Static,
      stage_runtime: false,
      optional: false,
    }
  }

  pub fn in_directory(mut self, directory: impl Into<String>) -> Self {
    self.directory = directory.into();
    self
  }

  pub fn with_qualifiers(mut self, qualifiers: LibraryQualifiers) -> Self {
    self.qualifiers = qualifiers;
    self
  }

  pub fn with_link(mut self, link: LinkKind) -> Self {
    self.link = link;
    self
  }

  pub fn staged(mut self) -> Self {
    self.stage_runtime = true;
    self
  }

  pub fn optional(mut self) -> Self {
    self.optional = true;
    self
  }
}

/// A file to copy next to the produced binary.
///
/// `staged` is relative to the output directory and usually starts with the
/// `$(TargetOutputDir)` token; neither path is interpreted by the planner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuntimeDependency {
  pub staged: String,
  pub source: String,
}

impl RuntimeDependency {
  pub fn new(staged: impl Into<String>, source: impl Into<String>) -> Self {
    Self {
      staged: staged.into(),
      source: source.into(),
    }
  }
}
