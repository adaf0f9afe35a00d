pub mod agent;
pub mod flood;
pub mod grid;
mod hash;
pub mod heading;
pub mod journal;
pub mod journal_file;
pub mod mission;
pub mod navigation;
pub mod render;
pub mod replay;
pub mod sim;
pub mod types;
pub mod walls;

pub use agent::Agent;
pub use flood::{DistanceField, FloodFill, FloodStats, Frontier, UNREACHABLE};
pub use journal::{StepJournal, StepRecord};
pub use journal_file::{
    JournalLoadError, JournalWriter, LoadedJournal, load_journal_from_file, save_journal_to_file,
};
pub use mission::{MissionConfig, MissionState};
pub use navigation::{MoveRanking, rank_moves, to_command};
pub use replay::*;
pub use sim::{MazeLayout, RunOutcome, RunReport, SimError, Simulator};
pub use types::*;
pub use walls::WallMap;
