//! The per-cell decision step that ties walls, distances, mission state, and ranking together.
//! This module exists as the single entry point the environment calls once per visited cell.
//! It does not own sensing or motion; the caller applies each returned command.

use crate::flood::FloodFill;
use crate::grid::CellGrid;
use crate::heading::to_absolute;
use crate::mission::{Arrival, MissionConfig, MissionState};
use crate::navigation::{MoveRanking, rank_moves, to_command};
use crate::types::*;
use crate::walls::WallMap;

pub struct Agent {
    config: MissionConfig,
    walls: WallMap,
    flood: FloodFill,
    visited: CellGrid<bool>,
    mission: MissionState,
    log: Vec<AgentEvent>,
    steps: u64,
}

impl Default for Agent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent {
    pub fn new() -> Self {
        Self::with_config(MissionConfig::default())
    }

    pub fn with_config(config: MissionConfig) -> Self {
        Self {
            config,
            walls: WallMap::new(),
            flood: FloodFill::new(),
            visited: CellGrid::filled(false),
            mission: MissionState::new(),
            log: Vec::new(),
            steps: 0,
        }
    }

    /// Decides the next command for the mouse standing on `(x, y)` with the given readings.
    pub fn step(&mut self, x: u8, y: u8, sensors: Sensors) -> Result<Command, AgentError> {
        let cell = Cell::new(x, y)?;
        self.steps += 1;

        if self.mission.phase() == MissionPhase::Done {
            return Ok(Command::Finish);
        }
        match self.mission.arrive(cell, &self.config) {
            Arrival::Finished => {
                self.log.push(AgentEvent::Finished {
                    reason: FinishReason::MissionComplete,
                    at: cell,
                });
                return Ok(Command::Finish);
            }
            Arrival::TargetChanged(target) => {
                self.log.push(AgentEvent::TargetChanged {
                    target,
                    run_count: self.mission.run_count(),
                });
            }
            Arrival::Unchanged => {}
        }

        self.absorb(cell, sensors);
        self.visited[cell] = true;
        self.flood.enqueue(cell);

        if let Some(target) = self.mission.take_retarget() {
            self.flood.reset(target);
            self.reflood(cell, RefloodReason::Retarget);
        }

        let mut ranking = self.rank(cell);
        if ranking.is_empty() {
            self.reflood(cell, RefloodReason::Stuck);
            ranking = self.rank(cell);
        }

        let (command, heading) = to_command(ranking.best(), self.mission.heading);
        self.mission.heading = heading;
        if command == Command::Finish {
            self.log.push(AgentEvent::Finished { reason: FinishReason::NoMove, at: cell });
        }
        Ok(command)
    }

    /// Records the three sensed boundaries of `cell` in absolute terms.
    fn absorb(&mut self, cell: Cell, sensors: Sensors) {
        for (relative, blocked) in sensors.readings() {
            if blocked {
                self.walls.record_wall(cell, to_absolute(self.mission.heading, relative));
            }
        }
    }

    fn reflood(&mut self, seed: Cell, reason: RefloodReason) {
        let stats = self.flood.propagate(&self.walls, self.mission.target(), &[seed]);
        self.log.push(AgentEvent::Reflooded { reason, seed, relaxations: stats.relaxations });
    }

    fn rank(&self, cell: Cell) -> MoveRanking {
        rank_moves(&self.walls, self.flood.field(), cell, self.mission.heading)
    }

    pub fn config(&self) -> &MissionConfig {
        &self.config
    }

    pub fn walls(&self) -> &WallMap {
        &self.walls
    }

    pub fn flood(&self) -> &FloodFill {
        &self.flood
    }

    pub fn mission(&self) -> &MissionState {
        &self.mission
    }

    pub fn heading(&self) -> Direction {
        self.mission.heading
    }

    pub fn is_visited(&self, cell: Cell) -> bool {
        self.visited[cell]
    }

    pub fn visited_count(&self) -> usize {
        self.visited.iter().filter(|&(_, seen)| seen).count()
    }

    pub fn log(&self) -> &[AgentEvent] {
        &self.log
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }
}
