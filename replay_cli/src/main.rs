use anyhow::Result;
use clap::{Parser, Subcommand};
use replay_cli::{check_determinism, load_script, run_script, RunOptions};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "replay_cli")]
#[command(about = "Run scripted Echo Shadows sessions without a browser")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Debug)]
struct ScriptArgs {
    /// JSON array of input frames, one per tick
    #[arg(long)]
    script: PathBuf,
    /// Ticks to run (defaults to the script length)
    #[arg(long)]
    ticks: Option<usize>,
    #[arg(long, default_value_t = 12345)]
    seed: u64,
    /// Stored best score at the start of the run
    #[arg(long, default_value_t = 0)]
    best: u32,
}

impl ScriptArgs {
    fn options(&self) -> RunOptions {
        RunOptions {
            ticks: self.ticks,
            seed: self.seed,
            best: self.best,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a script at 60 Hz and print a JSON summary
    Run(ScriptArgs),
    /// Run a script twice and fail if the runs differ
    Check(ScriptArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => {
            let script = load_script(&args.script)?;
            let outcome = run_script(&script, &args.options());
            println!("{}", serde_json::to_string_pretty(&outcome.summary)?);
        }
        Commands::Check(args) => {
            let script = load_script(&args.script)?;
            let summary = check_determinism(&script, &args.options())?;
            tracing::info!(ticks = summary.ticks, score = summary.score, "deterministic");
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}
