//! Environment harness that plays the mouse through a ground-truth layout.
//! This module exists so runs, tests, and tools can drive the agent end to end.
//! It does not influence decisions: the agent only ever sees the three sensor readings.

pub mod generator;
pub mod layout;

pub use layout::{LayoutError, MazeLayout};

use std::error::Error;
use std::fmt;

use crate::agent::Agent;
use crate::heading::{to_absolute, turn_left, turn_right};
use crate::journal::StepJournal;
use crate::mission::MissionConfig;
use crate::types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// The agent asked to move forward through a real wall.
    Crashed { at: Cell, heading: Direction },
    Agent(AgentError),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Crashed { at, heading } => {
                write!(f, "mouse drove into a wall at ({}, {}) heading {heading:?}", at.x, at.y)
            }
            SimError::Agent(error) => write!(f, "agent rejected its input: {error}"),
        }
    }
}

impl Error for SimError {}

impl From<AgentError> for SimError {
    fn from(error: AgentError) -> Self {
        SimError::Agent(error)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    MissionComplete,
    NoMove,
    StepBudgetExhausted,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    pub outcome: RunOutcome,
    pub steps: u32,
    pub forward_moves: u32,
    pub turns: u32,
    pub runs: u32,
}

pub struct Simulator {
    layout: MazeLayout,
    agent: Agent,
    cell: Cell,
    heading: Direction,
    journal: StepJournal,
    forward_moves: u32,
    turns: u32,
    finished: bool,
}

impl Simulator {
    pub fn new(layout: MazeLayout, config: MissionConfig) -> Self {
        Self {
            layout,
            agent: Agent::with_config(config.clone()),
            cell: Cell::START,
            heading: Direction::North,
            journal: StepJournal::new(config),
            forward_moves: 0,
            turns: 0,
            finished: false,
        }
    }

    /// Reads the sensors, asks the agent for a command, and applies it.
    pub fn step(&mut self) -> Result<Command, SimError> {
        if self.finished {
            return Ok(Command::Finish);
        }
        let sensors = self.layout.sensors(self.cell, self.heading);
        let command = self.agent.step(self.cell.x, self.cell.y, sensors)?;
        self.journal.append(self.cell, sensors, command);
        self.apply(command)?;
        Ok(command)
    }

    /// Moves or rotates the mouse as `command` asks.
    pub fn apply(&mut self, command: Command) -> Result<(), SimError> {
        match command {
            Command::MoveForward => {
                let next = self
                    .layout
                    .walls()
                    .passage(self.cell, self.heading)
                    .ok_or(SimError::Crashed { at: self.cell, heading: self.heading })?;
                self.cell = next;
                self.forward_moves += 1;
            }
            Command::TurnClockwise => self.turn(turn_right(self.heading)),
            Command::TurnCounterClockwise => self.turn(turn_left(self.heading)),
            Command::TurnAround => self.turn(to_absolute(self.heading, Relative::Back)),
            Command::Finish => self.finished = true,
        }
        Ok(())
    }

    /// Steps until the agent finishes or `max_steps` more decisions have been made.
    pub fn run(&mut self, max_steps: u32) -> Result<RunReport, SimError> {
        for _ in 0..max_steps {
            if self.finished {
                break;
            }
            self.step()?;
        }
        Ok(self.report())
    }

    fn turn(&mut self, heading: Direction) {
        self.heading = heading;
        self.turns += 1;
    }

    /// Totals for every decision made so far.
    pub fn report(&self) -> RunReport {
        let outcome = if !self.finished {
            RunOutcome::StepBudgetExhausted
        } else if self.agent.mission().phase() == MissionPhase::Done {
            RunOutcome::MissionComplete
        } else {
            RunOutcome::NoMove
        };
        RunReport {
            outcome,
            steps: self.journal.len() as u32,
            forward_moves: self.forward_moves,
            turns: self.turns,
            runs: self.agent.mission().run_count(),
        }
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    pub fn layout(&self) -> &MazeLayout {
        &self.layout
    }

    pub fn cell(&self) -> Cell {
        self.cell
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn journal(&self) -> &StepJournal {
        &self.journal
    }

    pub fn into_journal(self) -> StepJournal {
        self.journal
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn draw(&self) -> String {
        self.agent.draw(Some(self.cell))
    }
}
