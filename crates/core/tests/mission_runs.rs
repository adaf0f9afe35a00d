use mouse_core::sim::generator::{generate, generate_with_loops};
use mouse_core::{
    AgentEvent, Cell, Command, Direction, FinishReason, MazeLayout, MissionConfig, MissionPhase,
    RunOutcome, Simulator, Target,
};

const STEP_BUDGET: u32 = 20_000;

fn run_to_completion(layout: MazeLayout) -> Simulator {
    let mut sim = Simulator::new(layout, MissionConfig::default());
    let report = sim.run(STEP_BUDGET).expect("agent never drives into a real wall");
    assert_eq!(report.outcome, RunOutcome::MissionComplete, "report: {report:?}");
    assert_eq!(report.runs, 3);
    sim
}

#[test]
fn generated_perfect_mazes_complete_the_mission() {
    for seed in 0..8u64 {
        let sim = run_to_completion(generate(seed));
        assert_eq!(sim.cell(), Cell::START, "seed {seed}");
        assert_eq!(sim.agent().mission().phase(), MissionPhase::Done, "seed {seed}");
    }
}

#[test]
fn mazes_with_loops_complete_the_mission() {
    for seed in 100..106u64 {
        run_to_completion(generate_with_loops(seed, 24));
    }
}

#[test]
fn known_walls_never_contradict_the_layout() {
    let sim = run_to_completion(generate(7));
    let truth = sim.layout().walls();
    for cell in Cell::all() {
        for dir in Direction::ALL {
            if sim.agent().walls().has_wall(cell, dir) {
                assert!(truth.has_wall(cell, dir), "phantom wall at {cell:?} {dir:?}");
            }
        }
    }
}

#[test]
fn target_alternates_between_center_and_start() {
    let sim = run_to_completion(generate(3));
    let targets: Vec<Target> = sim
        .agent()
        .log()
        .iter()
        .filter_map(|event| match event {
            AgentEvent::TargetChanged { target, .. } => Some(*target),
            _ => None,
        })
        .collect();
    assert_eq!(
        targets,
        vec![Target::Start, Target::Center, Target::Start, Target::Center, Target::Start]
    );
    assert_eq!(
        sim.agent().log().last(),
        Some(&AgentEvent::Finished { reason: FinishReason::MissionComplete, at: Cell::START })
    );
}

#[test]
fn every_leg_covers_at_least_the_manhattan_gap() {
    let sim = run_to_completion(generate(11));
    let mut legs = Vec::new();
    let mut moves = 0u32;
    let mut target = Target::Center;
    for record in &sim.journal().steps {
        let reached = target.contains(record.cell);
        if reached {
            legs.push(moves);
            moves = 0;
            target = match target {
                Target::Center => Target::Start,
                Target::Start => Target::Center,
            };
        }
        if record.command == Command::MoveForward {
            moves += 1;
        }
    }
    assert_eq!(legs.len(), 6, "legs: {legs:?}");
    assert!(legs.iter().all(|&leg| leg >= 14), "legs: {legs:?}");
}

#[test]
fn single_run_config_finishes_after_the_first_return() {
    let mut sim = Simulator::new(generate(5), MissionConfig { required_runs: 1 });
    let report = sim.run(STEP_BUDGET).expect("agent never drives into a real wall");
    assert_eq!(report.outcome, RunOutcome::MissionComplete);
    assert_eq!(report.runs, 1);
}

#[test]
fn walled_in_start_reports_no_move() {
    let mut layout = MazeLayout::open();
    layout.walls_mut().record_wall(Cell::START, Direction::North);
    layout.walls_mut().record_wall(Cell::START, Direction::East);

    let mut sim = Simulator::new(layout, MissionConfig::default());
    let report = sim.run(STEP_BUDGET).expect("agent never drives into a real wall");
    assert_eq!(report.outcome, RunOutcome::NoMove);
    assert_eq!(report.forward_moves, 0);
}
