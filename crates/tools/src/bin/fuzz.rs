use anyhow::{Context, Result, bail};
use clap::Parser;
use mouse_core::sim::generator::{generate, generate_with_loops};
use mouse_core::{Cell, Direction, MissionConfig, RunOutcome, Simulator, UNREACHABLE};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Number of mazes to run
    #[arg(short, long, default_value_t = 100)]
    mazes: u32,
    #[arg(long, default_value_t = 20_000)]
    max_steps: u32,
}

/// Learned walls must be a subset of the real ones, and the mouse must be on a
/// cell with a finite distance.
fn check_invariants(sim: &Simulator) -> Result<()> {
    let known = sim.agent().walls();
    let truth = sim.layout().walls();
    for cell in Cell::all() {
        for dir in Direction::ALL {
            if known.has_wall(cell, dir) && !truth.has_wall(cell, dir) {
                bail!("Invariant failed: phantom wall at {cell:?} {dir:?}");
            }
        }
    }
    if sim.agent().flood().distance(sim.cell()) >= UNREACHABLE {
        bail!("Invariant failed: mouse stands on an unreachable cell {:?}", sim.cell());
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Starting Fuzz harness on seed {} for {} mazes...", args.seed, args.mazes);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for round in 0..args.mazes {
        let maze_seed = rng.next_u64();
        // Half the mazes are perfect, the rest get up to 40 extra openings.
        let openings = (rng.next_u64() % 81).saturating_sub(40) as usize;
        let layout = match openings {
            0 => generate(maze_seed),
            n => generate_with_loops(maze_seed, n),
        };

        let label = format!("maze {maze_seed} (round {round}, {openings} openings)");

        let mut sim = Simulator::new(layout, MissionConfig::default());
        for _ in 0..args.max_steps {
            if sim.is_finished() {
                break;
            }
            sim.step().with_context(|| format!("{label} crashed"))?;
            check_invariants(&sim).with_context(|| label.clone())?;
        }

        let report = sim.report();
        if report.outcome != RunOutcome::MissionComplete {
            println!("{}", sim.draw());
            bail!("{label} ended with {:?} after {} steps", report.outcome, report.steps);
        }
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}
