use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use mouse_core::sim::generator::{generate, generate_with_loops};
use mouse_core::{MazeLayout, MissionConfig, Simulator, save_journal_to_file};
use serde::Deserialize;

#[derive(Parser)]
#[command(author, version, about = "Runs the mouse through one maze and reports the outcome")]
struct Args {
    /// Maze text file; a maze is generated from `--seed` when omitted
    #[arg(short, long)]
    maze: Option<PathBuf>,
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Extra walls knocked out of the generated maze to create loops
    #[arg(short, long, default_value_t = 0)]
    loops: usize,
    /// TOML run settings
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(long)]
    max_steps: Option<u32>,
    /// Where to write the JSONL step journal
    #[arg(short, long)]
    journal: Option<PathBuf>,
    /// Print the learned map after the run
    #[arg(short, long)]
    draw: bool,
}

const DEFAULT_MAX_STEPS: u32 = 20_000;

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
struct RunSettings {
    mission: MissionConfig,
    max_steps: Option<u32>,
}

fn load_settings(path: &Path) -> Result<RunSettings> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("Failed to parse config: {}", path.display()))
}

fn load_layout(args: &Args) -> Result<MazeLayout> {
    let Some(path) = &args.maze else {
        return Ok(match args.loops {
            0 => generate(args.seed),
            openings => generate_with_loops(args.seed, openings),
        });
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read maze file: {}", path.display()))?;
    MazeLayout::parse(&text).with_context(|| format!("Failed to parse maze: {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = match &args.config {
        Some(path) => load_settings(path)?,
        None => RunSettings::default(),
    };
    let max_steps = args.max_steps.or(settings.max_steps).unwrap_or(DEFAULT_MAX_STEPS);

    let mut sim = Simulator::new(load_layout(&args)?, settings.mission);
    let report = sim.run(max_steps).context("Run aborted")?;

    if let Some(path) = &args.journal {
        save_journal_to_file(path, sim.journal())
            .with_context(|| format!("Failed to write journal: {}", path.display()))?;
    }
    if args.draw {
        println!("{}", sim.draw());
    }

    println!("Outcome: {:?}", report.outcome);
    println!("Steps: {}", report.steps);
    println!("Forward moves: {}", report.forward_moves);
    println!("Turns: {}", report.turns);
    println!("Center runs: {}", report.runs);
    println!("Snapshot Hash: {}", sim.agent().snapshot_hash());

    Ok(())
}
