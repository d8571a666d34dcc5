//! modplan-lib: module dependency resolution and build-plan emission.
//!
//! This crate turns declarative module descriptors into a concrete,
//! platform-specific build plan:
//! - `ModuleStore`: registered module descriptors, read-only during resolution
//! - `graph`: build order, cycle detection and public interface closures
//! - `specialize`: per-platform library naming and runtime staging
//! - `plan`: the aggregated `BuildPlan` consumed by a compiler/linker driver
//!
//! The pipeline performs no file-system I/O; [`project`] is the loader that
//! reads descriptors from disk.

pub mod consts;
pub mod descriptor;
pub mod error;
pub mod graph;
pub mod plan;
pub mod platform;
pub mod project;
pub mod resolve;
pub mod specialize;
pub mod store;
pub mod util;

pub use error::{PlanError, Result};
pub use plan::BuildPlan;
pub use platform::PlatformId;
pub use resolve::{ResolveOptions, resolve_plan, resolve_plans};
pub use store::ModuleStore;
