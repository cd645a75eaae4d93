//! Event log - one JSON line per turn
//!
//! ```text
//! {"game":1,"turn":3,"command":"left","action":"hitOther","events":[{"kind":"frogHitsOther","frog":0,"row":6,"col":9}]}
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::core::{GameEnd, GameSnapshot, TurnOutcome};
use crate::engine::TurnObserver;
use crate::protocol::{CommandLower, GameEventRecord, SnailActionCamel, TurnRecord};

impl TurnRecord {
    pub fn from_outcome(game: u32, outcome: &TurnOutcome) -> Self {
        Self {
            game,
            turn: outcome.turn,
            command: CommandLower::from(outcome.command),
            action: SnailActionCamel::from(outcome.action),
            events: outcome.events.iter().copied().map(GameEventRecord::from).collect(),
        }
    }
}

/// Writes a [`TurnRecord`] line for every turn it observes
#[derive(Debug)]
pub struct EventRecorder<W: Write> {
    out: W,
    game: u32,
    lines: u64,
}

impl EventRecorder<BufWriter<File>> {
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("failed to create event log {}", path.display()))?;
        info!("recording events to {}", path.display());
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> EventRecorder<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            game: 0,
            lines: 0,
        }
    }

    /// Lines written so far
    pub fn lines(&self) -> u64 {
        self.lines
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_record(&mut self, record: &TurnRecord) -> Result<()> {
        serde_json::to_writer(&mut self.out, record)?;
        self.out.write_all(b"\n")?;
        self.lines += 1;
        Ok(())
    }
}

impl<W: Write> TurnObserver for EventRecorder<W> {
    fn game_started(&mut self, _game: &GameSnapshot) -> Result<()> {
        self.game += 1;
        Ok(())
    }

    fn turn_finished(&mut self, outcome: &TurnOutcome, _game: &GameSnapshot) -> Result<()> {
        let record = TurnRecord::from_outcome(self.game, outcome);
        self.write_record(&record)
    }

    fn game_finished(&mut self, _end: GameEnd, _game: &GameSnapshot) -> Result<()> {
        if let Err(e) = self.out.flush() {
            // The game itself is unaffected; keep playing without a complete log.
            warn!("failed to flush event log: {}", e);
        }
        Ok(())
    }
}

/// Read an event log back, skipping blank lines
pub fn read_event_log(path: impl AsRef<Path>) -> Result<Vec<TurnRecord>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("failed to open event log {}", path.display()))?;

    let mut records = Vec::new();
    for (n, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}: malformed event line", path.display(), n + 1))?;
        records.push(record);
    }
    Ok(records)
}
