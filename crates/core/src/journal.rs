use serde::{Deserialize, Serialize};

use crate::mission::MissionConfig;
use crate::types::{Cell, Command, Sensors};

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

/// Every input the agent saw and every command it answered, in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepJournal {
    pub format_version: u16,
    pub config: MissionConfig,
    pub steps: Vec<StepRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    pub seq: u64,
    pub cell: Cell,
    pub sensors: Sensors,
    pub command: Command,
}

impl StepJournal {
    pub fn new(config: MissionConfig) -> Self {
        Self { format_version: JOURNAL_FORMAT_VERSION, config, steps: Vec::new() }
    }

    pub fn append(&mut self, cell: Cell, sensors: Sensors, command: Command) {
        let seq = self.steps.len() as u64;
        self.steps.push(StepRecord { seq, cell, sensors, command });
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
