//! The build plan: the terminal artifact handed to a compiler/linker driver.
//!
//! Emission accumulates, in build order:
//! - per-module include paths and definitions with public/private propagation
//! - a de-duplicated link-library list
//! - the set of dynamically loaded modules; a module reached only that way
//!   is not part of the build order and contributes no libraries
//! - the runtime-dependency copy list

mod emit;
mod types;

pub use emit::emit;
pub use types::{BuildPlan, PlannedModule};
