//! Recording a session and playing it back

use std::path::PathBuf;

use anyhow::Result;

use snail_trail::core::{GameEnd, GameSnapshot, TurnOutcome};
use snail_trail::engine::{play_session, ScriptedInput, TurnObserver};
use snail_trail::record::{read_event_log, EventRecorder, KeyLog, RecordingInput, ReplayInput};
use snail_trail::types::{Direction, PlayerInput};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("snail_trail_{}_{}", std::process::id(), name))
}

/// Collects a hash of the whole game after every turn
#[derive(Default)]
struct Hashes {
    turns: Vec<u64>,
    ends: Vec<GameEnd>,
}

impl TurnObserver for Hashes {
    fn turn_finished(&mut self, _outcome: &TurnOutcome, game: &GameSnapshot) -> Result<()> {
        self.turns.push(game.state_hash());
        Ok(())
    }

    fn game_finished(&mut self, end: GameEnd, game: &GameSnapshot) -> Result<()> {
        self.ends.push(end);
        self.turns.push(game.state_hash());
        Ok(())
    }
}

fn wandering_inputs() -> Vec<PlayerInput> {
    let pattern = [
        Direction::Left,
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Down,
        Direction::None,
        Direction::Right,
    ];
    let mut inputs: Vec<PlayerInput> = pattern
        .iter()
        .cycle()
        .take(40)
        .map(|&d| PlayerInput::Move(d))
        .collect();
    // Quit the game if still running, then ask for another go, and so on.
    inputs.push(PlayerInput::Quit);
    inputs.push(PlayerInput::Move(Direction::None));
    inputs.extend(pattern.iter().map(|&d| PlayerInput::Move(d)));
    inputs
}

#[test]
fn replay_reproduces_every_turn() {
    let keys = temp_path("replay_keys.json");
    let events = temp_path("replay_events.jsonl");

    let mut recording = RecordingInput::new(ScriptedInput::new(wandering_inputs()), 2024);
    let mut recorder = EventRecorder::create(&events).unwrap();
    let mut first = Hashes::default();
    let played = play_session(2024, &mut recording, &mut (&mut first, &mut recorder)).unwrap();
    drop(recorder);
    recording.log().save(&keys).unwrap();

    let log = KeyLog::load(&keys).unwrap();
    assert_eq!(log.seed, 2024);
    assert_eq!(&log, recording.log());

    let mut replay = ReplayInput::new(log);
    let mut second = Hashes::default();
    let replayed = play_session(replay.seed(), &mut replay, &mut second).unwrap();

    assert_eq!(played, replayed);
    assert_eq!(first.ends, second.ends);
    assert_eq!(first.turns, second.turns);
    assert!(replay.is_exhausted());

    let lines = read_event_log(&events).unwrap();
    assert_eq!(lines.len(), first.turns.len() - first.ends.len());
    assert!(lines.iter().all(|l| l.game >= 1 && l.game as usize <= played.len()));
    assert_eq!(lines[0].turn, 1);

    let _ = std::fs::remove_file(&keys);
    let _ = std::fs::remove_file(&events);
}

#[test]
fn different_seed_changes_the_games() {
    let run = |seed: u32| {
        let mut input = ScriptedInput::new(wandering_inputs());
        let mut hashes = Hashes::default();
        play_session(seed, &mut input, &mut hashes).unwrap();
        hashes.turns
    };
    assert_eq!(run(7), run(7));
    assert_ne!(run(7), run(8));
}

#[test]
fn missing_key_log_is_an_error() {
    let err = KeyLog::load(temp_path("does_not_exist.json")).unwrap_err();
    assert!(err.to_string().contains("failed to read key log"));
}

#[test]
fn event_log_lines_are_json_objects() {
    let events = temp_path("objects.jsonl");
    let mut recorder = EventRecorder::create(&events).unwrap();
    let mut input = ScriptedInput::new([
        PlayerInput::Move(Direction::Up),
        PlayerInput::Move(Direction::None),
    ]);
    play_session(99, &mut input, &mut recorder).unwrap();
    drop(recorder);

    let text = std::fs::read_to_string(&events).unwrap();
    for line in text.lines() {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        for key in ["game", "turn", "command", "action", "events"] {
            assert!(value.get(key).is_some(), "missing {} in {}", key, line);
        }
    }
    let _ = std::fs::remove_file(&events);
}
