//! Mission sequencing: explore to the center, then alternate start/center runs.
//! This module exists to keep the target flip and its one-shot re-flood request explicit.
//! It does not own the distance field; the agent acts on the retarget it hands out.

use serde::{Deserialize, Serialize};

use crate::types::{Cell, Direction, MissionPhase, Target};

pub const DEFAULT_REQUIRED_RUNS: u32 = 3;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionConfig {
    /// Center arrivals needed before returning to the start ends the mission.
    pub required_runs: u32,
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self { required_runs: DEFAULT_REQUIRED_RUNS }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arrival {
    Unchanged,
    TargetChanged(Target),
    Finished,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissionState {
    pub heading: Direction,
    target: Target,
    solved: bool,
    run_count: u32,
    pending_retarget: bool,
    done: bool,
}

impl Default for MissionState {
    fn default() -> Self {
        Self::new()
    }
}

impl MissionState {
    pub fn new() -> Self {
        Self {
            heading: Direction::North,
            target: Target::Center,
            solved: false,
            run_count: 0,
            pending_retarget: false,
            done: false,
        }
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn target_is_center(&self) -> bool {
        self.target == Target::Center
    }

    pub fn solved(&self) -> bool {
        self.solved
    }

    pub fn run_count(&self) -> u32 {
        self.run_count
    }

    pub fn pending_retarget(&self) -> bool {
        self.pending_retarget
    }

    pub fn phase(&self) -> MissionPhase {
        if self.done {
            MissionPhase::Done
        } else if !self.solved {
            MissionPhase::Exploring
        } else if self.target == Target::Start {
            MissionPhase::Returning
        } else {
            MissionPhase::SpeedRun
        }
    }

    /// Applies the arrival rules for the mouse standing on `cell`.
    ///
    /// The finish check runs first, so the last return to the start ends the mission
    /// instead of starting another run.
    pub fn arrive(&mut self, cell: Cell, config: &MissionConfig) -> Arrival {
        if self.done {
            return Arrival::Finished;
        }
        if self.solved && cell.is_start() && self.run_count >= config.required_runs {
            self.done = true;
            return Arrival::Finished;
        }
        if cell.is_start() && self.target == Target::Start {
            return self.flip(Target::Center);
        }
        if cell.is_center() && self.target == Target::Center {
            self.run_count += 1;
            self.solved = true;
            return self.flip(Target::Start);
        }
        Arrival::Unchanged
    }

    /// Hands out the pending retarget once; later calls return `None` until the next flip.
    pub fn take_retarget(&mut self) -> Option<Target> {
        if !self.pending_retarget {
            return None;
        }
        self.pending_retarget = false;
        Some(self.target)
    }

    fn flip(&mut self, target: Target) -> Arrival {
        self.target = target;
        self.pending_retarget = true;
        Arrival::TargetChanged(target)
    }
}
