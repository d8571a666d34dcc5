use std::path::Path;

use anyhow::{Result, bail};
use serde::Serialize;

use modplan_lib::{PlatformId, ResolveOptions, resolve_plans};

use crate::output::{OutputFormat, print_failure, print_info, print_json, print_success};

#[derive(Serialize)]
struct CheckEntry {
  target: String,
  platform: PlatformId,
  ok: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  error: Option<String>,
}

pub fn cmd_check(project: &Path, strict: bool, output: OutputFormat) -> Result<()> {
  let project = super::load_project(project)?;
  let store = project.store()?;
  let options = if strict {
    ResolveOptions::strict()
  } else {
    ResolveOptions::default()
  };

  let mut entries = Vec::new();
  for target in &project.targets {
    for (platform, result) in resolve_plans(&store, target, &PlatformId::ALL, &options) {
      entries.push(CheckEntry {
        target: target.name().to_string(),
        platform,
        ok: result.is_ok(),
        error: result.err().map(|e| e.to_string()),
      });
    }
  }

  let failures = entries.iter().filter(|e| !e.ok).count();

  if output.is_json() {
    print_json(&entries)?;
  } else {
    print_info(&format!(
      "Checked {} targets across {} platforms",
      project.targets.len(),
      PlatformId::ALL.len()
    ));
    for entry in &entries {
      match &entry.error {
        None => print_success(&format!("{} on {}", entry.target, entry.platform)),
        Some(e) => print_failure(&format!("{} on {}: {}", entry.target, entry.platform, e)),
      }
    }
  }

  if failures > 0 {
    bail!("{} of {} resolutions failed", failures, entries.len());
  }
  Ok(())
}
