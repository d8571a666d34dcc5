use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use serde::Serialize;

use modplan_lib::plan::BuildPlan;
use modplan_lib::{PlatformId, ResolveOptions, resolve_plan, resolve_plans};

use crate::output::{OutputFormat, print_failure, print_json, print_list, print_stat, print_success, symbols};

#[derive(Serialize)]
struct PlanOutput<'a> {
  fingerprint: String,
  plan: &'a BuildPlan,
}

#[derive(Serialize)]
struct PlatformOutput<'a> {
  platform: PlatformId,
  #[serde(skip_serializing_if = "Option::is_none")]
  fingerprint: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  plan: Option<&'a BuildPlan>,
  #[serde(skip_serializing_if = "Option::is_none")]
  error: Option<String>,
}

pub fn cmd_plan(
  project: &Path,
  target: &str,
  platform: Option<PlatformId>,
  all_platforms: bool,
  strict: bool,
  output: OutputFormat,
) -> Result<()> {
  let project = super::load_project(project)?;
  let store = project.store()?;
  let target = project.target(target)?;
  let options = if strict {
    ResolveOptions::strict()
  } else {
    ResolveOptions::default()
  };

  if all_platforms {
    let results = resolve_plans(&store, target, &PlatformId::ALL, &options);
    let failures = results.iter().filter(|(_, r)| r.is_err()).count();

    if output.is_json() {
      let mut entries = Vec::with_capacity(results.len());
      for (platform, result) in &results {
        entries.push(match result {
          Ok(plan) => PlatformOutput {
            platform: *platform,
            fingerprint: Some(plan.fingerprint()?.to_string()),
            plan: Some(plan),
            error: None,
          },
          Err(e) => PlatformOutput {
            platform: *platform,
            fingerprint: None,
            plan: None,
            error: Some(e.to_string()),
          },
        });
      }
      print_json(&entries)?;
    } else {
      for (platform, result) in &results {
        match result {
          Ok(plan) => {
            print_success(&format!("{} on {}", target.name(), platform));
            print_summary(plan)?;
          }
          Err(e) => print_failure(&format!("{} on {}: {}", target.name(), platform, e)),
        }
      }
    }

    if failures > 0 {
      bail!("{} of {} platforms failed to resolve", failures, results.len());
    }
    return Ok(());
  }

  let platform = platform
    .or_else(PlatformId::current)
    .ok_or_else(|| anyhow!("The host is not a supported platform; pass --platform"))?;

  let plan = resolve_plan(&store, target, platform, &options)
    .with_context(|| format!("Failed to resolve {} for {}", target.name(), platform))?;

  if output.is_json() {
    print_json(&PlanOutput {
      fingerprint: plan.fingerprint()?.to_string(),
      plan: &plan,
    })?;
  } else {
    print_success(&format!("{} on {}", target.name(), platform));
    print_summary(&plan)?;
    println!();
    print_details(&plan);
  }

  Ok(())
}

fn print_summary(plan: &BuildPlan) -> Result<()> {
  print_stat("Type", &format!("{:?}", plan.target_type()));
  print_stat("Modules", &plan.modules().len().to_string());
  print_stat("Link libraries", &plan.link_libraries().len().to_string());
  print_stat("Fingerprint", &plan.fingerprint()?.to_string());
  Ok(())
}

fn print_details(plan: &BuildPlan) {
  print_list("Build order:", plan.order());
  print_list("Include paths:", plan.include_paths());
  print_list("Definitions:", plan.definitions());
  print_list("Link libraries:", plan.link_libraries());
  print_list("Dynamically loaded:", plan.dynamic_modules());
  print_list(
    "Runtime dependencies:",
    plan
      .runtime_dependencies()
      .iter()
      .map(|dep| format!("{} {} {}", dep.source, symbols::ARROW, dep.staged)),
  );
}
