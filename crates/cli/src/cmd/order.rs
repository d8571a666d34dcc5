use std::path::Path;

use anyhow::{Context, Result};

use modplan_lib::graph::resolve_target;

use crate::output::{OutputFormat, print_json};

pub fn cmd_order(project: &Path, target: &str, output: OutputFormat) -> Result<()> {
  let project = super::load_project(project)?;
  let store = project.store()?;
  let target = project.target(target)?;

  let resolution = resolve_target(&store, target).with_context(|| format!("Failed to resolve {}", target.name()))?;

  if output.is_json() {
    print_json(&resolution.order())?;
  } else {
    for (index, name) in resolution.order().iter().enumerate() {
      println!("{:>3}. {}", index + 1, name);
    }
  }

  Ok(())
}
