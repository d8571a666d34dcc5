//! Public interface closures.
//!
//! The public interface of a module is the module itself followed by every
//! module reachable through public dependency edges. Whatever compiles against
//! a module sees the include paths and definitions of its whole interface.

use std::collections::{BTreeMap, HashSet};

use crate::error::{PlanError, Result};

/// Compute the public interface of every module.
///
/// `modules` must be in build order (dependencies first) and yield each
/// module's name with its public dependencies in declaration order.
pub fn interface_closures<'a, I>(modules: I) -> Result<BTreeMap<String, Vec<String>>>
where
  I: IntoIterator<Item = (&'a str, &'a [String])>,
{
  let mut closures: BTreeMap<String, Vec<String>> = BTreeMap::new();

  for (name, public_deps) in modules {
    let mut closure = vec![name.to_string()];
    let mut seen: HashSet<String> = HashSet::from([name.to_string()]);

    for dep in public_deps {
      let dep_closure = closures
        .get(dep)
        .ok_or_else(|| PlanError::unknown_module(dep.as_str(), Some(name)))?;
      for member in dep_closure {
        if seen.insert(member.clone()) {
          closure.push(member.clone());
        }
      }
    }

    closures.insert(name.to_string(), closure);
  }

  Ok(closures)
}

/// Modules whose public surface is visible while compiling one module:
/// its own interface plus the interfaces of its private dependencies.
pub fn visible_modules(
  closures: &BTreeMap<String, Vec<String>>,
  name: &str,
  private_deps: &[String],
) -> Result<Vec<String>> {
  let own = closures.get(name).ok_or_else(|| PlanError::unknown_module(name, None))?;
  let mut visible = own.clone();
  let mut seen: HashSet<&str> = own.iter().map(String::as_str).collect();

  for dep in private_deps {
    let dep_closure = closures
      .get(dep)
      .ok_or_else(|| PlanError::unknown_module(dep.as_str(), Some(name)))?;
    for member in dep_closure {
      if seen.insert(member.as_str()) {
        visible.push(member.clone());
      }
    }
  }

  Ok(visible)
}
