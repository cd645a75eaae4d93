//! Runtime options for the `snail-trail` binary.
//!
//! Read from `SNAIL_TRAIL_*` environment variables first, then overridden by
//! command-line flags. Game rules are not configurable.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

pub const USAGE: &str = "\
usage: snail-trail [--seed N] [--record-keys PATH] [--replay-keys PATH]
                   [--event-log PATH] [--show-pellets]

environment: SNAIL_TRAIL_SEED, SNAIL_TRAIL_RECORD_KEYS, SNAIL_TRAIL_REPLAY_KEYS,
             SNAIL_TRAIL_EVENT_LOG, SNAIL_TRAIL_SHOW_PELLETS=1, RUST_LOG";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Seed of the first game; clock-derived when unset
    pub seed: Option<u32>,
    pub record_keys: Option<PathBuf>,
    pub replay_keys: Option<PathBuf>,
    pub event_log: Option<PathBuf>,
    pub show_pellets: bool,
    /// `--help` was given
    pub help: bool,
}

impl Config {
    /// Environment, then `args` (without the program name)
    pub fn load(args: &[String]) -> Result<Self> {
        let mut config = Self::from_env();
        config.apply_args(args)?;
        Ok(config)
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any variable lookup. Unparsable values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        Self {
            seed: non_empty("SNAIL_TRAIL_SEED").and_then(|s| s.parse().ok()),
            record_keys: non_empty("SNAIL_TRAIL_RECORD_KEYS").map(PathBuf::from),
            replay_keys: non_empty("SNAIL_TRAIL_REPLAY_KEYS").map(PathBuf::from),
            event_log: non_empty("SNAIL_TRAIL_EVENT_LOG").map(PathBuf::from),
            show_pellets: non_empty("SNAIL_TRAIL_SHOW_PELLETS")
                .map(|s| matches!(s.as_str(), "1" | "true" | "yes" | "on"))
                .unwrap_or(false),
            help: false,
        }
    }

    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    i += 1;
                    let v = value(args, i, "--seed")?;
                    let seed = v
                        .parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
                    self.seed = Some(seed);
                }
                "--record-keys" => {
                    i += 1;
                    self.record_keys = Some(PathBuf::from(value(args, i, "--record-keys")?));
                }
                "--replay-keys" => {
                    i += 1;
                    self.replay_keys = Some(PathBuf::from(value(args, i, "--replay-keys")?));
                }
                "--event-log" => {
                    i += 1;
                    self.event_log = Some(PathBuf::from(value(args, i, "--event-log")?));
                }
                "--show-pellets" => self.show_pellets = true,
                "-h" | "--help" => self.help = true,
                other => return Err(anyhow!("unknown argument: {}\n\n{}", other, USAGE)),
            }
            i += 1;
        }
        Ok(())
    }

    /// The configured seed, or one taken from the clock
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs() as u32 ^ d.subsec_nanos())
                .unwrap_or(1)
        })
    }
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing value for {}", flag))
}
