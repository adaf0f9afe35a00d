//! Stable snapshot hashing for deterministic verification.
//! This module exists to keep hashing concerns separate from the decision step.
//! It does not own replay execution or journal persistence.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use crate::agent::Agent;
use crate::types::{MissionPhase, Target};

impl Agent {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.steps());
        hasher.write_u32(self.config().required_runs);
        for line in self.walls().lines() {
            hasher.write_u32(line);
        }
        for (_, distance) in self.flood().field().iter() {
            hasher.write_u16(distance);
        }
        hasher.write_u64(self.flood().frontier().len() as u64);

        let mission = self.mission();
        hasher.write_u8(mission.heading.index());
        hasher.write_u8(match mission.target() {
            Target::Center => 0,
            Target::Start => 1,
        });
        hasher.write_u8(match mission.phase() {
            MissionPhase::Exploring => 0,
            MissionPhase::Returning => 1,
            MissionPhase::SpeedRun => 2,
            MissionPhase::Done => 3,
        });
        hasher.write_u32(mission.run_count());
        hasher.write_u64(self.visited_count() as u64);
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::agent::Agent;
    use crate::types::Sensors;

    #[test]
    fn identical_inputs_hash_identically() {
        let mut left = Agent::new();
        let mut right = Agent::new();
        assert_eq!(left.snapshot_hash(), right.snapshot_hash());

        let sensors = Sensors { front: false, left: true, right: false };
        left.step(0, 0, sensors).expect("in bounds");
        right.step(0, 0, sensors).expect("in bounds");
        assert_eq!(left.snapshot_hash(), right.snapshot_hash());
    }

    #[test]
    fn a_new_wall_changes_the_hash() {
        let mut left = Agent::new();
        let mut right = Agent::new();
        left.step(0, 0, Sensors { front: false, left: true, right: false }).expect("in bounds");
        right.step(0, 0, Sensors { front: false, left: true, right: true }).expect("in bounds");
        assert_ne!(left.snapshot_hash(), right.snapshot_hash());
    }
}
