//! Project file loading.
//!
//! A project file is JSON with two arrays, `modules` and `targets`, holding
//! serialized [`ModuleDescriptor`]s and [`TargetDescriptor`]s. Unknown keys and
//! unknown platform names are rejected while parsing; descriptor-level checks
//! run when the modules are registered into a [`ModuleStore`].
//!
//! # Example
//!
//! ```json
//! {
//!   "modules": [
//!     { "name": "Core" },
//!     { "name": "Game", "public_dependencies": ["Core"] }
//!   ],
//!   "targets": [
//!     { "name": "Game", "target_type": "Game", "extra_modules": ["Game"] }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::descriptor::{ModuleDescriptor, TargetDescriptor};
use crate::error::PlanError;
use crate::store::ModuleStore;

#[derive(Debug, Error)]
pub enum ProjectError {
  #[error("failed to read project file {path}: {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to parse project file: {0}")]
  Parse(#[from] serde_json::Error),

  #[error(transparent)]
  Plan(#[from] PlanError),

  #[error("target '{name}' is defined more than once")]
  DuplicateTarget { name: String },

  #[error("unknown target '{name}'")]
  UnknownTarget { name: String },
}

/// The descriptors declared by one project file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
  #[serde(default)]
  pub modules: Vec<ModuleDescriptor>,
  #[serde(default)]
  pub targets: Vec<TargetDescriptor>,
}

impl Project {
  /// Parse a project from JSON text.
  pub fn from_json_str(text: &str) -> Result<Self, ProjectError> {
    let project: Project = serde_json::from_str(text)?;

    let mut names = HashSet::new();
    for target in &project.targets {
      if !names.insert(target.name()) {
        return Err(ProjectError::DuplicateTarget {
          name: target.name().to_string(),
        });
      }
    }

    Ok(project)
  }

  /// Read and parse a project file.
  pub fn load(path: &Path) -> Result<Self, ProjectError> {
    debug!(path = ?path, "loading project file");
    let text = fs::read_to_string(path).map_err(|source| ProjectError::Read {
      path: path.to_path_buf(),
      source,
    })?;
    Self::from_json_str(&text)
  }

  /// Register every module into a fresh store.
  pub fn store(&self) -> Result<ModuleStore, ProjectError> {
    Ok(ModuleStore::from_descriptors(self.modules.iter().cloned())?)
  }

  pub fn target(&self, name: &str) -> Result<&TargetDescriptor, ProjectError> {
    self
      .targets
      .iter()
      .find(|t| t.name() == name)
      .ok_or_else(|| ProjectError::UnknownTarget { name: name.to_string() })
  }
}
