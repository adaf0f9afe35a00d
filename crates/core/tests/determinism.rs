use mouse_core::sim::generator::generate;
use mouse_core::{
    MissionConfig, Simulator, load_journal_from_file, replay_journal, save_journal_to_file,
};

fn finished_sim(seed: u64) -> Simulator {
    let mut sim = Simulator::new(generate(seed), MissionConfig::default());
    sim.run(20_000).expect("agent never drives into a real wall");
    sim
}

#[test]
fn same_maze_gives_same_run_and_hash() {
    let a = finished_sim(42);
    let b = finished_sim(42);
    assert_eq!(a.journal(), b.journal());
    assert_eq!(a.agent().snapshot_hash(), b.agent().snapshot_hash());
}

#[test]
fn different_mazes_give_different_hashes() {
    assert_ne!(finished_sim(1).agent().snapshot_hash(), finished_sim(2).agent().snapshot_hash());
}

#[test]
fn full_mission_replays_from_memory() {
    let sim = finished_sim(17);
    let result = replay_journal(sim.journal()).expect("journal replays");
    assert!(result.mission_complete);
    assert_eq!(result.steps, sim.journal().len() as u64);
    assert_eq!(result.final_snapshot_hash, sim.agent().snapshot_hash());
}

#[test]
fn full_mission_replays_from_a_journal_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mission.jsonl");
    let sim = finished_sim(29);

    save_journal_to_file(&path, sim.journal()).unwrap();
    let loaded = load_journal_from_file(&path).unwrap();
    let result = replay_journal(&loaded.journal).expect("journal replays");

    assert!(result.mission_complete);
    assert_eq!(result.final_snapshot_hash, sim.agent().snapshot_hash());
}
