//! Errors raised while registering descriptors and resolving build plans.
//!
//! Every variant is a configuration error: it aborts the resolution for the
//! (target, platform) pair and no partial plan is produced.

use thiserror::Error;

use crate::platform::PlatformId;

pub type Result<T> = std::result::Result<T, PlanError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
  /// A module with the same name is already registered.
  #[error("module '{name}' is already registered")]
  DuplicateModule { name: String },

  /// A module name could not be found in the store.
  ///
  /// `referrer` names the module that declared the dependency, if any.
  #[error("unknown module '{name}'{}", required_by(.referrer))]
  UnknownModule { name: String, referrer: Option<String> },

  /// The dependency graph contains a cycle. Members are listed in traversal order.
  #[error("dependency cycle detected: {}", format_cycle(.cycle))]
  CyclicDependency { cycle: Vec<String> },

  /// A required library could not be synthesized for the platform.
  #[error("module '{module}' cannot be resolved for {platform}: {reason}")]
  UnresolvedPlatform {
    module: String,
    platform: PlatformId,
    reason: String,
  },

  /// A descriptor is structurally malformed and was rejected at registration.
  #[error("invalid descriptor for module '{module}': {reason}")]
  InvalidDescriptor { module: String, reason: String },
}

impl PlanError {
  pub fn unknown_module(name: impl Into<String>, referrer: Option<&str>) -> Self {
    Self::UnknownModule {
      name: name.into(),
      referrer: referrer.map(str::to_string),
    }
  }

  pub fn invalid_descriptor(module: impl Into<String>, reason: impl ToString) -> Self {
    Self::InvalidDescriptor {
      module: module.into(),
      reason: reason.to_string(),
    }
  }
}

fn required_by(referrer: &Option<String>) -> String {
  match referrer {
    Some(r) => format!(" (required by '{}')", r),
    None => String::new(),
  }
}

/// Render a cycle as `A -> B -> A`.
fn format_cycle(cycle: &[String]) -> String {
  let mut parts: Vec<&str> = cycle.iter().map(String::as_str).collect();
  if let Some(first) = cycle.first() {
    parts.push(first);
  }
  parts.join(" -> ")
}
