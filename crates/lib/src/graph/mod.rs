//! Dependency graph resolution.
//!
//! This module handles:
//! - Depth-first traversal from a target's root modules
//! - Cycle detection with three-colour marking
//! - A reproducible build order (dependencies before dependents)
//! - Public interface closures for include/definition propagation
//!
//! # Ordering
//!
//! Roots are visited in declaration order. Within a module, public
//! dependencies are visited before private ones, each list in declaration
//! order. A module is appended to the order once all of its dependencies are
//! done, so the result is a post-order of the traversal and identical
//! descriptors always produce the identical order.

mod closure;
mod dot;

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, trace};

use crate::descriptor::{ModuleDescriptor, TargetDescriptor};
use crate::error::{PlanError, Result};
use crate::store::ModuleStore;

pub use closure::{interface_closures, visible_modules};
pub use dot::{EdgeVisibility, dependency_graph, to_dot};

/// Result of resolving a set of root modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
  order: Vec<String>,
  interfaces: BTreeMap<String, Vec<String>>,
}

impl Resolution {
  /// Module names in build order.
  pub fn order(&self) -> &[String] {
    &self.order
  }

  pub fn into_order(self) -> Vec<String> {
    self.order
  }

  /// The public interface closure of a resolved module: the module itself and
  /// its transitive public dependencies.
  pub fn interface(&self, name: &str) -> Option<&[String]> {
    self.interfaces.get(name).map(Vec::as_slice)
  }

  pub fn len(&self) -> usize {
    self.order.len()
  }

  pub fn is_empty(&self) -> bool {
    self.order.is_empty()
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
  InProgress,
  Done,
}

/// A module on the traversal stack with the index of its next dependency.
struct Frame<'a> {
  descriptor: &'a ModuleDescriptor,
  next: usize,
}

/// Depth-first walk driven by an explicit stack, so dependency depth is not
/// bounded by the thread's call stack.
struct Traversal<'a> {
  store: &'a ModuleStore,
  marks: HashMap<&'a str, Mark>,
  frames: Vec<Frame<'a>>,
  done: Vec<&'a ModuleDescriptor>,
}

impl<'a> Traversal<'a> {
  fn visit(&mut self, root: &'a str) -> Result<()> {
    self.enter(root, None)?;

    while let Some(frame) = self.frames.last_mut() {
      let descriptor = frame.descriptor;
      match descriptor.dependencies().nth(frame.next) {
        Some(dep) => {
          frame.next += 1;
          self.enter(dep, Some(descriptor.name.as_str()))?;
        }
        None => {
          self.frames.pop();
          self.marks.insert(descriptor.name.as_str(), Mark::Done);
          self.done.push(descriptor);
        }
      }
    }

    Ok(())
  }

  /// Push `name` onto the stack unless it is already done.
  fn enter(&mut self, name: &'a str, referrer: Option<&str>) -> Result<()> {
    match self.marks.get(name) {
      Some(Mark::Done) => return Ok(()),
      Some(Mark::InProgress) => {
        let start = self
          .frames
          .iter()
          .position(|f| f.descriptor.name == name)
          .unwrap_or(0);
        let cycle = self.frames[start..].iter().map(|f| f.descriptor.name.clone()).collect();
        return Err(PlanError::CyclicDependency { cycle });
      }
      None => {}
    }

    let store = self.store;
    let descriptor = store
      .get(name)
      .ok_or_else(|| PlanError::unknown_module(name, referrer))?;

    // Dynamically loaded modules are not traversed, but must exist.
    for plugin in &descriptor.dynamically_loaded_modules {
      if !store.contains(plugin) {
        return Err(PlanError::unknown_module(plugin.as_str(), Some(name)));
      }
    }

    trace!(module = name, depth = self.frames.len(), "visiting module");
    self.marks.insert(descriptor.name.as_str(), Mark::InProgress);
    self.frames.push(Frame { descriptor, next: 0 });
    Ok(())
  }
}

/// Resolve the build order for a set of root modules.
///
/// # Errors
///
/// - `UnknownModule` if a root, a dependency or a dynamically loaded module
///   of a visited module is not registered
/// - `CyclicDependency` if the reachable graph contains a cycle
pub fn resolve_order<S: AsRef<str>>(store: &ModuleStore, roots: &[S]) -> Result<Resolution> {
  let mut traversal = Traversal {
    store,
    marks: HashMap::new(),
    frames: Vec::new(),
    done: Vec::new(),
  };

  for root in roots {
    // Borrow the name from the store so marks can outlive `roots`.
    let descriptor = store.lookup(root.as_ref())?;
    traversal.visit(&descriptor.name)?;
  }

  let interfaces = interface_closures(
    traversal
      .done
      .iter()
      .map(|d| (d.name.as_str(), d.public_dependencies.as_slice())),
  )?;
  let order: Vec<String> = traversal.done.iter().map(|d| d.name.clone()).collect();

  debug!(modules = order.len(), "resolved build order");
  Ok(Resolution { order, interfaces })
}

/// Resolve the build order of a target's extra modules.
pub fn resolve_target(store: &ModuleStore, target: &TargetDescriptor) -> Result<Resolution> {
  debug!(target = target.name(), roots = ?target.extra_modules(), "resolving target");
  resolve_order(store, target.extra_modules())
}
