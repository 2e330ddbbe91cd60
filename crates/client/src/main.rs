//! Grid robot client binary.
//!
//! ```bash
//! # Pre-flight check only
//! cargo run -p robot-client -- check "M:-10,10,-10,10;S:-5,5;[W5,E5,N4,E3,S2,W1]"
//!
//! # Check, then play the plan back tile by tile
//! cargo run -p robot-client -- run --show-path "M:0,5,0,5;S:4,4;[N2]"
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use robot_client::{ClientConfig, Robot, RunOutcome, Tick, check, logging, render_run};

/// Parse, check and play back grid robot commands
#[derive(Parser)]
#[command(name = "robot")]
#[command(about = "Grid robot command planner", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print every visited position
    #[arg(long, global = true)]
    show_path: bool,

    /// Emit reports as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a command and report whether its path stays in bounds
    Check {
        /// Command string; falls back to ROBOT_COMMAND
        input: Option<String>,
    },

    /// Check a command, then move the robot one tile per tick
    Run {
        /// Command string; falls back to ROBOT_COMMAND
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env();
    config.output.show_path |= cli.show_path;
    config.output.json |= cli.json;

    let _guard = logging::setup_logging(&config.logging)?;

    match cli.command {
        Command::Check { input } => {
            let input = resolve_input(input, &config)?;
            run_check(&input, &config)
        }
        Command::Run { input } => {
            let input = resolve_input(input, &config)?;
            run_robot(&input, &config)
        }
    }
}

fn resolve_input(input: Option<String>, config: &ClientConfig) -> Result<String> {
    input
        .or_else(|| config.command.clone())
        .context("No command given. Pass one as an argument or set ROBOT_COMMAND.")
}

fn run_check(input: &str, config: &ClientConfig) -> Result<()> {
    let (_, report) = check(input).context("Invalid command")?;

    if config.output.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text(config.output.show_path));
    }

    if let Some(exit) = report.exit_position {
        anyhow::bail!("Path leaves the map at {exit}");
    }
    Ok(())
}

fn run_robot(input: &str, config: &ClientConfig) -> Result<()> {
    let (command, report) = check(input).context("Invalid command")?;
    if !config.output.json {
        print!("{}", report.render_text(config.output.show_path));
    }

    let mut robot = Robot::new(command);
    if !config.output.json {
        while let Ok(Tick::Moved {
            direction,
            position,
        }) = robot.tick()
        {
            println!("  {direction:<5} -> {position}");
        }
    }
    let summary = robot.run_to_end();

    if config.output.json {
        let output = serde_json::json!({ "plan": report, "run": summary });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", render_run(&summary, config.output.show_path));
    }

    tracing::info!(moves = summary.moves, "Run complete");
    match summary.outcome {
        RunOutcome::Completed => Ok(()),
        RunOutcome::Aborted {
            target: Some(target),
        } => anyhow::bail!("Run aborted before reaching {target}"),
        RunOutcome::Aborted { target: None } => {
            anyhow::bail!("Run aborted at the edge of the coordinate range")
        }
    }
}
