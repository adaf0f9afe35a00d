use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use mouse_core::{ReplayResult, StepJournal, load_journal_from_file, replay_journal};

#[derive(Parser)]
#[command(author, version, about = "Replays a recorded mouse run and prints its final hash")]
struct Args {
    /// Journal to replay: a `.jsonl` hash-chained file or a plain `.json` dump
    #[arg(short, long)]
    journal: PathBuf,
}

fn read_journal(path: &Path) -> Result<StepJournal> {
    if path.extension().is_some_and(|ext| ext == "json") {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read journal file: {}", path.display()))?;
        return serde_json::from_str(&data).with_context(|| "Failed to deserialize journal JSON");
    }
    let loaded = load_journal_from_file(path)
        .with_context(|| format!("Failed to load journal file: {}", path.display()))?;
    Ok(loaded.journal)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let journal = read_journal(&args.journal)?;

    let result: ReplayResult = replay_journal(&journal)
        .map_err(|e| anyhow!("Replay failed during execution: {:?}", e))?;

    println!("Replay complete.");
    println!("Steps: {}", result.steps);
    println!("Mission complete: {}", result.mission_complete);
    println!("Snapshot Hash: {}", result.final_snapshot_hash);

    Ok(())
}
