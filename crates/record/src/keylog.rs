//! Key logs - the seed and every input of a session
//!
//! A session's games are seeded `seed`, `seed + 1`, ... so the seed plus the
//! input sequence (including the answers to the "another go?" prompt) is
//! enough to reproduce every game exactly.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

use crate::engine::{InputProvider, ScriptedInput};
use crate::protocol::InputLower;
use crate::types::PlayerInput;

/// Seed and inputs of one recorded session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "KeyLogFile", from = "KeyLogFile")]
pub struct KeyLog {
    pub seed: u32,
    pub inputs: Vec<PlayerInput>,
}

#[derive(Serialize, Deserialize)]
struct KeyLogFile {
    seed: u32,
    inputs: Vec<InputLower>,
}

impl From<KeyLog> for KeyLogFile {
    fn from(value: KeyLog) -> Self {
        Self {
            seed: value.seed,
            inputs: value.inputs.into_iter().map(InputLower::from).collect(),
        }
    }
}

impl From<KeyLogFile> for KeyLog {
    fn from(value: KeyLogFile) -> Self {
        Self {
            seed: value.seed,
            inputs: value.inputs.into_iter().map(PlayerInput::from).collect(),
        }
    }
}

impl KeyLog {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            inputs: Vec::new(),
        }
    }

    pub fn push(&mut self, input: PlayerInput) {
        self.inputs.push(input);
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read key log {}", path.display()))?;
        let log = Self::from_json(&text)
            .with_context(|| format!("malformed key log {}", path.display()))?;
        info!(
            "loaded key log {} (seed {}, {} inputs)",
            path.display(),
            log.seed,
            log.inputs.len()
        );
        Ok(log)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)
            .with_context(|| format!("failed to write key log {}", path.display()))?;
        info!("saved {} inputs to {}", self.inputs.len(), path.display());
        Ok(())
    }
}

/// Passes inputs through from `inner`, keeping a copy of each
#[derive(Debug)]
pub struct RecordingInput<P> {
    inner: P,
    log: KeyLog,
}

impl<P: InputProvider> RecordingInput<P> {
    pub fn new(inner: P, seed: u32) -> Self {
        Self {
            inner,
            log: KeyLog::new(seed),
        }
    }

    pub fn log(&self) -> &KeyLog {
        &self.log
    }

    pub fn into_log(self) -> KeyLog {
        self.log
    }
}

impl<P: InputProvider> InputProvider for RecordingInput<P> {
    fn next_input(&mut self) -> Result<PlayerInput> {
        let input = self.inner.next_input()?;
        self.log.push(input);
        Ok(input)
    }
}

/// Plays back a key log, then quits
#[derive(Debug, Clone)]
pub struct ReplayInput {
    seed: u32,
    script: ScriptedInput,
}

impl ReplayInput {
    pub fn new(log: KeyLog) -> Self {
        Self {
            seed: log.seed,
            script: ScriptedInput::new(log.inputs),
        }
    }

    /// Seed of the first recorded game
    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn is_exhausted(&self) -> bool {
        self.script.remaining() == 0
    }
}

impl InputProvider for ReplayInput {
    fn next_input(&mut self) -> Result<PlayerInput> {
        self.script.next_input()
    }
}
