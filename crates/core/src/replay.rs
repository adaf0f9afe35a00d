use crate::agent::Agent;
use crate::journal::{JOURNAL_FORMAT_VERSION, StepJournal};
use crate::types::{AgentError, Command, MissionPhase};

#[derive(Debug, PartialEq)]
pub enum ReplayError {
    UnsupportedVersion(u16),
    Agent { seq: u64, error: AgentError },
    CommandMismatch { seq: u64, recorded: Command, replayed: Command },
}

#[derive(Debug, PartialEq)]
pub struct ReplayResult {
    pub final_snapshot_hash: u64,
    pub steps: u64,
    pub mission_complete: bool,
}

/// Feeds every journaled input to a fresh agent and checks it answers the same way.
pub fn replay_journal(journal: &StepJournal) -> Result<ReplayResult, ReplayError> {
    if journal.format_version != JOURNAL_FORMAT_VERSION {
        return Err(ReplayError::UnsupportedVersion(journal.format_version));
    }

    let mut agent = Agent::with_config(journal.config.clone());
    for record in &journal.steps {
        let replayed = agent
            .step(record.cell.x, record.cell.y, record.sensors)
            .map_err(|error| ReplayError::Agent { seq: record.seq, error })?;
        if replayed != record.command {
            return Err(ReplayError::CommandMismatch {
                seq: record.seq,
                recorded: record.command,
                replayed,
            });
        }
    }

    Ok(ReplayResult {
        final_snapshot_hash: agent.snapshot_hash(),
        steps: agent.steps(),
        mission_complete: agent.mission().phase() == MissionPhase::Done,
    })
}
