//! Serialized forms of game values
//!
//! The game types stay free of serde; these mirrors fix the on-disk spelling.

use serde::{Deserialize, Serialize};

use crate::types::{Direction, GameEvent, PlayerInput, Position, SnailAction};

/// One recorded key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputLower {
    Left,
    Right,
    Up,
    Down,
    None,
    Quit,
}

impl From<PlayerInput> for InputLower {
    fn from(value: PlayerInput) -> Self {
        match value {
            PlayerInput::Move(Direction::Left) => Self::Left,
            PlayerInput::Move(Direction::Right) => Self::Right,
            PlayerInput::Move(Direction::Up) => Self::Up,
            PlayerInput::Move(Direction::Down) => Self::Down,
            PlayerInput::Move(Direction::None) => Self::None,
            PlayerInput::Quit => Self::Quit,
        }
    }
}

impl From<InputLower> for PlayerInput {
    fn from(value: InputLower) -> Self {
        match value {
            InputLower::Left => PlayerInput::Move(Direction::Left),
            InputLower::Right => PlayerInput::Move(Direction::Right),
            InputLower::Up => PlayerInput::Move(Direction::Up),
            InputLower::Down => PlayerInput::Move(Direction::Down),
            InputLower::None => PlayerInput::Move(Direction::None),
            InputLower::Quit => PlayerInput::Quit,
        }
    }
}

/// The player command of a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandLower {
    Left,
    Right,
    Up,
    Down,
    None,
}

impl From<Direction> for CommandLower {
    fn from(value: Direction) -> Self {
        match value {
            Direction::Left => Self::Left,
            Direction::Right => Self::Right,
            Direction::Up => Self::Up,
            Direction::Down => Self::Down,
            Direction::None => Self::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SnailActionCamel {
    HitWall,
    HitFrog,
    HitPellet,
    HitSlime,
    HitOther,
    HitLettuce,
    HitFinalPellet,
    HitFinalLettuce,
    NoMove,
}

impl From<SnailAction> for SnailActionCamel {
    fn from(value: SnailAction) -> Self {
        match value {
            SnailAction::HitWall => Self::HitWall,
            SnailAction::HitFrog => Self::HitFrog,
            SnailAction::HitPellet => Self::HitPellet,
            SnailAction::HitSlime => Self::HitSlime,
            SnailAction::HitOther => Self::HitOther,
            SnailAction::HitLettuce => Self::HitLettuce,
            SnailAction::HitFinalPellet => Self::HitFinalPellet,
            SnailAction::HitFinalLettuce => Self::HitFinalLettuce,
            SnailAction::NoMove => Self::NoMove,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameEventKind {
    FrogHitsSnail,
    FrogHitsOther,
    EagleEatsFrog,
    DissolveSlime,
}

/// A garden event as written to the event log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEventRecord {
    pub kind: GameEventKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub frog: Option<usize>,
    pub row: i8,
    pub col: i8,
}

impl From<GameEvent> for GameEventRecord {
    fn from(value: GameEvent) -> Self {
        let (kind, frog) = match value {
            GameEvent::FrogHitsSnail { frog, .. } => (GameEventKind::FrogHitsSnail, Some(frog)),
            GameEvent::FrogLanded { frog, .. } => (GameEventKind::FrogHitsOther, Some(frog)),
            GameEvent::EagleTookFrog { frog, .. } => (GameEventKind::EagleEatsFrog, Some(frog)),
            GameEvent::SlimeDissolved { .. } => (GameEventKind::DissolveSlime, None),
        };
        let Position { row, col } = value.position();
        Self {
            kind,
            frog,
            row,
            col,
        }
    }
}

/// One line of the event log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based game number within the session
    pub game: u32,
    pub turn: u32,
    pub command: CommandLower,
    pub action: SnailActionCamel,
    pub events: Vec<GameEventRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_spelling() {
        let up = InputLower::from(PlayerInput::Move(Direction::Up));
        let json = serde_json::to_string(&up).unwrap();
        assert_eq!(json, "\"up\"");
        let back: InputLower = serde_json::from_str("\"quit\"").unwrap();
        assert_eq!(PlayerInput::from(back), PlayerInput::Quit);
    }

    #[test]
    fn test_action_spelling_matches_names() {
        for action in [
            SnailAction::HitWall,
            SnailAction::HitFinalLettuce,
            SnailAction::NoMove,
        ] {
            let json = serde_json::to_string(&SnailActionCamel::from(action)).unwrap();
            assert_eq!(json, format!("\"{}\"", action.as_str()));
        }
    }

    #[test]
    fn test_event_record_fields() {
        let record = GameEventRecord::from(GameEvent::SlimeDissolved {
            at: Position::new(4, 7),
        });
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"kind":"dissolveSlime","row":4,"col":7}"#);

        let record = GameEventRecord::from(GameEvent::FrogLanded {
            frog: 1,
            at: Position::new(2, 3),
        });
        assert_eq!(record.kind, GameEventKind::FrogHitsOther);
        assert_eq!(record.frog, Some(1));
    }
}
