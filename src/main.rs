use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod catalog;
mod schema;

/// Default base directory holding one subdirectory per task.
const DEFAULT_RUNS_DIR: &str = "static/runs";

/// Task types indexed when no --task override is given.
const DEFAULT_TASKS: [&str; 2] = ["maze", "memory"];

#[derive(Parser, Debug)]
#[command(
    name = "runman",
    version,
    about = "Index run frame images into per-task runs.json manifests"
)]
struct Cli {
    /// Base runs directory containing one subdirectory per task
    #[arg(long, value_name = "DIR", default_value = DEFAULT_RUNS_DIR)]
    runs_dir: PathBuf,

    /// Task name to index (repeatable; defaults to the built-in task set)
    #[arg(long = "task", value_name = "NAME")]
    tasks: Vec<String>,

    /// Suppress per-task summary lines
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let tasks: Vec<String> = if cli.tasks.is_empty() {
        DEFAULT_TASKS.iter().map(|task| task.to_string()).collect()
    } else {
        cli.tasks
    };

    for task in &tasks {
        let task_dir = cli.runs_dir.join(task);
        let runs = catalog::build_manifest(&task_dir)?;
        let manifest_path = catalog::write_manifest(&task_dir, &runs)?;
        if !cli.quiet {
            println!(
                "Wrote manifest to {} ({} runs)",
                manifest_path.display(),
                runs.len()
            );
        }
    }
    Ok(())
}
