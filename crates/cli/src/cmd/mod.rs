mod check;
mod graph;
mod info;
mod order;
mod plan;

use std::path::Path;

use anyhow::{Context, Result};

use modplan_lib::project::Project;

pub use check::cmd_check;
pub use graph::cmd_graph;
pub use info::cmd_info;
pub use order::cmd_order;
pub use plan::cmd_plan;

fn load_project(path: &Path) -> Result<Project> {
  Project::load(path).with_context(|| format!("Failed to load project: {}", path.display()))
}
