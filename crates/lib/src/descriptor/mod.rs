//! Declarative module and target descriptors.
//!
//! Descriptors are plain data built by a loader (see [`crate::project`]) or in
//! code with the builder methods. They are never mutated once registered.

mod library;
mod module;
mod target;

pub use library::{ArchQualifier, LibraryQualifiers, LibrarySpec, LinkKind, RuntimeDependency};
pub use module::{CompileSettings, ModuleDescriptor, ModuleKind, PchMode};
pub use target::{BuildSettingsVersion, IncludeOrderVersion, TargetDescriptor, TargetType};
