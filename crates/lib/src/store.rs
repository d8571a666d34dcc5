//! The module descriptor store.
//!
//! An explicit value constructed per build invocation. Registration needs
//! `&mut ModuleStore` while resolution only borrows `&ModuleStore`, so the
//! registration phase always ends before any resolution starts.

use std::collections::BTreeMap;

use tracing::debug;

use crate::descriptor::ModuleDescriptor;
use crate::error::{PlanError, Result};

#[derive(Debug, Clone, Default)]
pub struct ModuleStore {
  modules: BTreeMap<String, ModuleDescriptor>,
}

impl ModuleStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Build a store from a list of descriptors, failing on the first rejected one.
  pub fn from_descriptors<I>(descriptors: I) -> Result<Self>
  where
    I: IntoIterator<Item = ModuleDescriptor>,
  {
    let mut store = Self::new();
    for descriptor in descriptors {
      store.register(descriptor)?;
    }
    Ok(store)
  }

  /// Register a descriptor.
  ///
  /// # Errors
  ///
  /// Returns `DuplicateModule` if the name is taken and `InvalidDescriptor` if
  /// the descriptor is malformed. The store is left unchanged on error.
  pub fn register(&mut self, descriptor: ModuleDescriptor) -> Result<()> {
    descriptor.validate()?;

    if self.modules.contains_key(&descriptor.name) {
      return Err(PlanError::DuplicateModule { name: descriptor.name });
    }

    debug!(
      module = %descriptor.name,
      kind = ?descriptor.kind,
      public = descriptor.public_dependencies.len(),
      private = descriptor.private_dependencies.len(),
      "registered module"
    );
    self.modules.insert(descriptor.name.clone(), descriptor);
    Ok(())
  }

  /// Look up a descriptor by name.
  pub fn lookup(&self, name: &str) -> Result<&ModuleDescriptor> {
    self.modules.get(name).ok_or_else(|| PlanError::unknown_module(name, None))
  }

  pub fn get(&self, name: &str) -> Option<&ModuleDescriptor> {
    self.modules.get(name)
  }

  pub fn contains(&self, name: &str) -> bool {
    self.modules.contains_key(name)
  }

  pub fn len(&self) -> usize {
    self.modules.len()
  }

  pub fn is_empty(&self) -> bool {
    self.modules.is_empty()
  }

  /// Registered module names in sorted order.
  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.modules.keys().map(String::as_str)
  }

  pub fn iter(&self) -> impl Iterator<Item = &ModuleDescriptor> {
    self.modules.values()
  }
}
