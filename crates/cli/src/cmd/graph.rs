use std::path::Path;

use anyhow::{Context, Result};

use modplan_lib::graph::{resolve_target, to_dot};

pub fn cmd_graph(project: &Path, target: &str) -> Result<()> {
  let project = super::load_project(project)?;
  let store = project.store()?;
  let target = project.target(target)?;

  let resolution = resolve_target(&store, target).with_context(|| format!("Failed to resolve {}", target.name()))?;
  print!("{}", to_dot(&store, &resolution)?);

  Ok(())
}
