//! File-backed JSONL step journal with a SHA-256 hash chain.
//!
//! The file format is line-delimited JSON (`.jsonl`):
//! - Line 1: header with `format_version` and the mission `config`.
//! - Lines 2+: one record per agent decision, each carrying a
//!   SHA-256 hash chain (`prev_sha256_hex`, `sha256_hex`).
//!
//! Each record is flushed as soon as it is written, so a run that dies midway
//! still leaves a loadable prefix. Loading stops at the first bad line.

use std::error::Error;
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::journal::{JOURNAL_FORMAT_VERSION, StepJournal, StepRecord};
use crate::mission::MissionConfig;
use crate::types::{Cell, Command, Sensors};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
struct FileHeader {
    format_version: u16,
    config: MissionConfig,
}

/// Fields hashed for one record, serialized to JSON and followed by the previous hash.
#[derive(Serialize)]
struct RecordBody<'a> {
    seq: u64,
    cell: &'a Cell,
    sensors: &'a Sensors,
    command: &'a Command,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct FileRecord {
    seq: u64,
    cell: Cell,
    sensors: Sensors,
    command: Command,
    prev_sha256_hex: String,
    sha256_hex: String,
}

const INITIAL_HASH: &str = "0000000000000000000000000000000000000000000000000000000000000000";

fn record_sha256(record: &StepRecord, prev_sha256_hex: &str) -> Result<String, serde_json::Error> {
    let body = RecordBody {
        seq: record.seq,
        cell: &record.cell,
        sensors: &record.sensors,
        command: &record.command,
    };
    let body_json = serde_json::to_string(&body)?;
    let mut hasher = Sha256::new();
    hasher.update(body_json.as_bytes());
    hasher.update(prev_sha256_hex.as_bytes());
    Ok(format!("{:064x}", hasher.finalize()))
}

/// Appends agent decisions to a JSONL file as they happen.
pub struct JournalWriter {
    writer: BufWriter<File>,
    last_sha256_hex: String,
    next_seq: u64,
}

impl JournalWriter {
    /// Creates the file (and missing parent directories) and writes the header line.
    pub fn create(path: &Path, config: &MissionConfig) -> io::Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(File::create(path)?);

        let header = FileHeader { format_version: JOURNAL_FORMAT_VERSION, config: config.clone() };
        let header_json = serde_json::to_string(&header).map_err(io::Error::other)?;
        writeln!(writer, "{header_json}")?;
        writer.flush()?;

        Ok(Self { writer, last_sha256_hex: INITIAL_HASH.to_string(), next_seq: 0 })
    }

    /// Continues a file previously read with [`load_journal_from_file`].
    pub fn resume(path: &Path, loaded: &LoadedJournal) -> io::Result<Self> {
        let file = OpenOptions::new().append(true).open(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            last_sha256_hex: loaded.last_sha256_hex.clone(),
            next_seq: loaded.next_seq,
        })
    }

    pub fn append(&mut self, cell: Cell, sensors: Sensors, command: Command) -> io::Result<()> {
        let record = StepRecord { seq: self.next_seq, cell, sensors, command };
        let sha256_hex =
            record_sha256(&record, &self.last_sha256_hex).map_err(io::Error::other)?;

        let line = FileRecord {
            seq: record.seq,
            cell,
            sensors,
            command,
            prev_sha256_hex: self.last_sha256_hex.clone(),
            sha256_hex: sha256_hex.clone(),
        };
        let line_json = serde_json::to_string(&line).map_err(io::Error::other)?;
        writeln!(self.writer, "{line_json}")?;
        self.writer.flush()?;

        self.last_sha256_hex = sha256_hex;
        self.next_seq += 1;
        Ok(())
    }
}

/// Writes a whole in-memory journal to `path`, replacing any existing file.
pub fn save_journal_to_file(path: &Path, journal: &StepJournal) -> io::Result<()> {
    let mut writer = JournalWriter::create(path, &journal.config)?;
    for record in &journal.steps {
        writer.append(record.cell, record.sensors, record.command)?;
    }
    Ok(())
}

#[derive(Debug)]
pub struct LoadedJournal {
    pub journal: StepJournal,
    /// Hash of the last valid record, or the all-zero hash for an empty journal.
    pub last_sha256_hex: String,
    pub next_seq: u64,
}

#[derive(Debug)]
pub enum JournalLoadError {
    Io(io::Error),
    EmptyFile,
    InvalidHeader { line: usize, message: String },
    InvalidRecord { line: usize, message: String },
    /// The file ended without a trailing newline.
    IncompleteLine { line: usize },
    HashChainBroken { line: usize },
}

impl fmt::Display for JournalLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "journal I/O error: {e}"),
            Self::EmptyFile => write!(f, "journal file is empty"),
            Self::InvalidHeader { line, message } => {
                write!(f, "invalid journal header at line {line}: {message}")
            }
            Self::InvalidRecord { line, message } => {
                write!(f, "invalid journal record at line {line}: {message}")
            }
            Self::IncompleteLine { line } => write!(f, "incomplete journal line at line {line}"),
            Self::HashChainBroken { line } => write!(f, "SHA-256 hash chain broken at line {line}"),
        }
    }
}

impl Error for JournalLoadError {}

/// Loads and validates a JSONL journal, checking sequence numbers and the hash chain.
pub fn load_journal_from_file(path: &Path) -> Result<LoadedJournal, JournalLoadError> {
    let content = fs::read_to_string(path).map_err(JournalLoadError::Io)?;
    let lines: Vec<&str> = content.lines().collect();
    let Some(header_line) = lines.first() else {
        return Err(JournalLoadError::EmptyFile);
    };
    if !content.ends_with('\n') {
        return Err(JournalLoadError::IncompleteLine { line: lines.len() });
    }

    let header: FileHeader = serde_json::from_str(header_line)
        .map_err(|e| JournalLoadError::InvalidHeader { line: 1, message: e.to_string() })?;
    let mut journal = StepJournal::new(header.config);
    journal.format_version = header.format_version;

    let mut prev_sha256_hex = INITIAL_HASH.to_string();
    for (index, line) in lines.iter().enumerate().skip(1) {
        let line_number = index + 1;
        let invalid =
            |message: String| JournalLoadError::InvalidRecord { line: line_number, message };

        let record: FileRecord =
            serde_json::from_str(line).map_err(|e| invalid(e.to_string()))?;
        let expected_seq = journal.len() as u64;
        if record.seq != expected_seq {
            return Err(invalid(format!("expected seq {expected_seq}, found {}", record.seq)));
        }
        if record.prev_sha256_hex != prev_sha256_hex {
            return Err(JournalLoadError::HashChainBroken { line: line_number });
        }

        let step = StepRecord {
            seq: record.seq,
            cell: record.cell,
            sensors: record.sensors,
            command: record.command,
        };
        let expected = record_sha256(&step, &prev_sha256_hex).map_err(|e| invalid(e.to_string()))?;
        if record.sha256_hex != expected {
            return Err(JournalLoadError::HashChainBroken { line: line_number });
        }

        journal.steps.push(step);
        prev_sha256_hex = record.sha256_hex;
    }

    let next_seq = journal.len() as u64;
    Ok(LoadedJournal { journal, last_sha256_hex: prev_sha256_hex, next_seq })
}
