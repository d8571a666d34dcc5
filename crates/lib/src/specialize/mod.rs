//! Platform specialization of module descriptors.
//!
//! Turns a [`ModuleDescriptor`] into a [`ResolvedModule`] for one platform:
//! the platform branch of every platform-keyed field is selected and library
//! templates become concrete file paths. A module without a branch for the
//! platform contributes no libraries or runtime dependencies there.

pub mod naming;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::consts::TARGET_OUTPUT_DIR;
use crate::descriptor::{CompileSettings, ModuleDescriptor, ModuleKind, PchMode, RuntimeDependency};
use crate::error::{PlanError, Result};
use crate::platform::PlatformId;

use naming::{join_path, library_file_names};

/// What to do when an external module declares required libraries for other
/// platforms but none for the active one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlatformPolicy {
  /// The module contributes nothing on that platform.
  #[default]
  Permissive,
  /// Resolution fails with `UnresolvedPlatform`.
  Strict,
}

/// A module descriptor specialized for one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedModule {
  pub name: String,
  pub kind: ModuleKind,
  pub platform: PlatformId,
  pub public_dependencies: Vec<String>,
  pub private_dependencies: Vec<String>,
  pub public_include_paths: Vec<String>,
  pub private_include_paths: Vec<String>,
  pub definitions: Vec<String>,
  pub private_definitions: Vec<String>,
  /// Concrete library paths to link, in declaration order.
  pub libraries: Vec<String>,
  /// Files to stage next to the binary, in declaration order.
  pub runtime_dependencies: Vec<RuntimeDependency>,
  pub dynamically_loaded_modules: Vec<String>,
  pub pch_mode: PchMode,
  pub settings: CompileSettings,
}

/// Specialize a descriptor for a platform.
///
/// # Errors
///
/// Returns `UnresolvedPlatform` if a required library's file name cannot be
/// synthesized, or if `policy` is strict and an external module has required
/// libraries for other platforms but no branch for this one.
pub fn specialize(descriptor: &ModuleDescriptor, platform: PlatformId, policy: PlatformPolicy) -> Result<ResolvedModule> {
  let name = descriptor.name.as_str();
  let mut libraries = Vec::new();
  let mut runtime_dependencies = Vec::new();

  match descriptor.additional_libraries.get(&platform) {
    Some(specs) => {
      for spec in specs {
        let names = match library_file_names(platform, spec) {
          Ok(names) => names,
          Err(e) if spec.optional => {
            debug!(module = name, %platform, error = %e, "skipping optional library");
            continue;
          }
          Err(e) => {
            return Err(PlanError::UnresolvedPlatform {
              module: name.to_string(),
              platform,
              reason: e.to_string(),
            });
          }
        };

        libraries.push(join_path(&spec.directory, &names.link));
        if spec.stage_runtime {
          runtime_dependencies.push(RuntimeDependency::new(
            join_path(TARGET_OUTPUT_DIR, &names.shared),
            join_path(&spec.directory, &names.shared),
          ));
        }
      }
    }
    None => check_missing_branch(descriptor, platform, policy)?,
  }

  if let Some(deps) = descriptor.runtime_dependencies.get(&platform) {
    runtime_dependencies.extend(deps.iter().cloned());
  }

  debug!(
    module = name,
    %platform,
    libraries = libraries.len(),
    runtime = runtime_dependencies.len(),
    "specialized module"
  );

  Ok(ResolvedModule {
    name: descriptor.name.clone(),
    kind: descriptor.kind,
    platform,
    public_dependencies: descriptor.public_dependencies.clone(),
    private_dependencies: descriptor.private_dependencies.clone(),
    public_include_paths: descriptor.public_include_paths.clone(),
    private_include_paths: descriptor.private_include_paths.clone(),
    definitions: descriptor.definitions.clone(),
    private_definitions: descriptor.private_definitions.clone(),
    libraries,
    runtime_dependencies,
    dynamically_loaded_modules: descriptor.dynamically_loaded_modules.clone(),
    pch_mode: descriptor.pch_mode,
    settings: descriptor.settings,
  })
}

fn check_missing_branch(descriptor: &ModuleDescriptor, platform: PlatformId, policy: PlatformPolicy) -> Result<()> {
  if descriptor.kind != ModuleKind::External {
    return Ok(());
  }

  let declared: Vec<PlatformId> = descriptor
    .additional_libraries
    .iter()
    .filter(|(_, specs)| specs.iter().any(|s| !s.optional))
    .map(|(p, _)| *p)
    .collect();

  if declared.is_empty() {
    return Ok(());
  }

  match policy {
    PlatformPolicy::Permissive => {
      warn!(
        module = %descriptor.name,
        %platform,
        declared = ?declared,
        "external module has no libraries for platform"
      );
      Ok(())
    }
    PlatformPolicy::Strict => Err(PlanError::UnresolvedPlatform {
      module: descriptor.name.clone(),
      platform,
      reason: format!(
        "required libraries are only declared for {}",
        declared.iter().map(|p| p.as_str()).collect::<Vec<_>>().join(", ")
      ),
    }),
  }
}
