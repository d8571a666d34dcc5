mod cmd;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use modplan_lib::PlatformId;

use crate::cmd::{cmd_check, cmd_graph, cmd_info, cmd_order, cmd_plan};
use crate::output::OutputFormat;

/// modplan - resolve module descriptors into platform build plans
#[derive(Parser)]
#[command(name = "modplan")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose logging
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Path to the project file
  #[arg(short, long, global = true, env = "MODPLAN_PROJECT", default_value = "modplan.json")]
  project: PathBuf,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Resolve a target into a build plan
  Plan {
    /// Target to resolve
    target: String,

    /// Platform to plan for (defaults to the host platform)
    #[arg(long, env = "MODPLAN_PLATFORM", conflicts_with = "all_platforms")]
    platform: Option<PlatformId>,

    /// Plan for every supported platform
    #[arg(long)]
    all_platforms: bool,

    /// Fail when an external module has no libraries for the platform
    #[arg(long)]
    strict: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    output: OutputFormat,
  },

  /// Print the build order of a target
  Order {
    /// Target to resolve
    target: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    output: OutputFormat,
  },

  /// Print the resolved dependency graph of a target in DOT format
  Graph {
    /// Target to resolve
    target: String,
  },

  /// Resolve every target on every platform and report failures
  Check {
    /// Fail when an external module has no libraries for a platform
    #[arg(long)]
    strict: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    output: OutputFormat,
  },

  /// Show host platform and supported platforms
  Info,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  debug!(project = %cli.project.display(), "using project file");

  match cli.command {
    Commands::Plan {
      target,
      platform,
      all_platforms,
      strict,
      output,
    } => cmd_plan(&cli.project, &target, platform, all_platforms, strict, output),
    Commands::Order { target, output } => cmd_order(&cli.project, &target, output),
    Commands::Graph { target } => cmd_graph(&cli.project, &target),
    Commands::Check { strict, output } => cmd_check(&cli.project, strict, output),
    Commands::Info => {
      cmd_info();
      Ok(())
    }
  }
}
