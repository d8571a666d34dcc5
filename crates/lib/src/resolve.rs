//! The resolution pipeline.
//!
//! target -> store lookup -> build order -> per-module specialization -> plan.
//! Each call works on a borrowed, read-only store and either returns a whole
//! plan or the first error; nothing partial escapes.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::descriptor::TargetDescriptor;
use crate::error::Result;
use crate::graph::resolve_target;
use crate::plan::{BuildPlan, emit};
use crate::platform::PlatformId;
use crate::specialize::{PlatformPolicy, specialize};
use crate::store::ModuleStore;

/// Options controlling a resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveOptions {
  pub policy: PlatformPolicy,
}

impl ResolveOptions {
  pub fn strict() -> Self {
    Self {
      policy: PlatformPolicy::Strict,
    }
  }
}

/// Resolve a target into a build plan for one platform.
pub fn resolve_plan(
  store: &ModuleStore,
  target: &TargetDescriptor,
  platform: PlatformId,
  options: &ResolveOptions,
) -> Result<BuildPlan> {
  info!(target = target.name(), %platform, policy = ?options.policy, "resolving build plan");

  let resolution = resolve_target(store, target)?;
  debug!(order = ?resolution.order(), "build order");

  let resolved = resolution
    .order()
    .iter()
    .map(|name| specialize(store.lookup(name)?, platform, options.policy))
    .collect::<Result<Vec<_>>>()?;

  emit(&resolved, target, platform)
}

/// Resolve one target for several platforms in parallel.
///
/// Results come back in the order of `platforms`; each platform succeeds or
/// fails independently.
pub fn resolve_plans(
  store: &ModuleStore,
  target: &TargetDescriptor,
  platforms: &[PlatformId],
  options: &ResolveOptions,
) -> Vec<(PlatformId, Result<BuildPlan>)> {
  platforms
    .par_iter()
    .map(|&platform| (platform, resolve_plan(store, target, platform, options)))
    .collect()
}
