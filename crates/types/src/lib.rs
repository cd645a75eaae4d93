//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation core, terminal rendering, recording).
//!
//! # Garden Dimensions
//!
//! The garden is a 20x30 grid including a one-cell wall border:
//!
//! - **Rows**: 0..=19, interior rows 1..=18
//! - **Columns**: 0..=29, interior columns 1..=28
//! - Walls sit at row 0, row 19, column 0 and column 29
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SLIME_LIFETIME` | 25 | Turns before a slime deposit dissolves |
//! | `NUM_PELLETS` | 15 | Slug pellets scattered at game start |
//! | `PELLET_THRESHOLD` | 5 | Pellets slithered over before the snail dies |
//! | `LETTUCE_QUOTA` | 4 | Lettuces to eat to win |
//! | `NUM_FROGS` | 2 | Frogs hunting the snail |
//! | `FROG_LEAP` | 4 | Cells a frog jumps per axis per turn |
//! | `EAGLE_STRIKE` | 32 | 1 in N chance per frog per turn of an eagle strike |
//!
//! # Examples
//!
//! ```
//! use snail_trail_types::{Direction, Occupant, Position, GARDEN_HEIGHT, GARDEN_WIDTH};
//!
//! // Directions map to unit offsets
//! let start = Position::new(5, 5);
//! assert_eq!(start.step(Direction::Right), Position::new(5, 6));
//! assert_eq!(start.step(Direction::None), start);
//!
//! // Parse directions (case-insensitive)
//! assert_eq!(Direction::from_str("LEFT"), Some(Direction::Left));
//!
//! // Occupants have a console glyph
//! assert_eq!(Occupant::Snail.symbol(), '&');
//!
//! // Garden dimensions
//! assert_eq!(GARDEN_HEIGHT, 20);
//! assert_eq!(GARDEN_WIDTH, 30);
//! ```

/// Garden height in cells, walls included (20 rows)
pub const GARDEN_HEIGHT: i8 = 20;

/// Garden width in cells, walls included (30 columns)
pub const GARDEN_WIDTH: i8 = 30;

/// How long slime lasts, in turns
pub const SLIME_LIFETIME: usize = 25;

/// Number of slug pellets scattered about
pub const NUM_PELLETS: usize = 15;

/// Slither over this many pellets and the snail dies
pub const PELLET_THRESHOLD: u32 = 5;

/// Lettuces to eat before the snail wins
pub const LETTUCE_QUOTA: u32 = 4;

/// Number of frogs in the garden
pub const NUM_FROGS: usize = 2;

/// How far a frog jumps on each axis when it moves
pub const FROG_LEAP: i8 = 4;

/// There's a 1 in `EAGLE_STRIKE` chance of an eagle taking a frog each turn
pub const EAGLE_STRIKE: u32 = 32;


/// What a single garden cell holds
///
/// Only one occupant fits in a cell. Anything "underneath" (a lettuce under a
/// frog) has to be tracked outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Occupant {
    /// Garden wall (border only)
    Wall,
    /// Open ground
    #[default]
    Blank,
    /// Snail produce, blocks the snail until it dissolves
    Slime,
    /// Hidden slug pellet
    Pellet,
    /// Food, eat them all to win
    Lettuce,
    /// The player
    Snail,
    /// A hungry frog
    Frog,
    /// What the eagle left behind
    FrogRemains,
    /// Just the shell left (end of game only)
    DeadSnail,
}

impl Occupant {
    /// Console glyph for this occupant
    ///
    /// # Examples
    ///
    /// ```
    /// use snail_trail_types::Occupant;
    ///
    /// assert_eq!(Occupant::Wall.symbol(), '+');
    /// assert_eq!(Occupant::Frog.symbol(), 'M');
    /// assert_eq!(Occupant::Blank.symbol(), ' ');
    /// ```
    pub fn symbol(&self) -> char {
        match self {
            Occupant::Wall => '+',
            Occupant::Blank => ' ',
            Occupant::Slime => '.',
            Occupant::Pellet => '-',
            Occupant::Lettuce => '@',
            Occupant::Snail => '&',
            Occupant::Frog => 'M',
            Occupant::FrogRemains => 'X',
            Occupant::DeadSnail => 'o',
        }
    }

    /// Parse an occupant from its console glyph
    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Occupant::Wall),
            ' ' => Some(Occupant::Blank),
            '.' => Some(Occupant::Slime),
            '-' => Some(Occupant::Pellet),
            '@' => Some(Occupant::Lettuce),
            '&' => Some(Occupant::Snail),
            'M' => Some(Occupant::Frog),
            'X' => Some(Occupant::FrogRemains),
            'o' => Some(Occupant::DeadSnail),
            _ => None,
        }
    }

    /// Whether the snail may slither onto this occupant and survive the move
    pub fn is_traversable(&self) -> bool {
        matches!(
            self,
            Occupant::Blank | Occupant::FrogRemains | Occupant::Pellet | Occupant::Lettuce
        )
    }
}

/// Player move direction
///
/// `None` models "no key / invalid key": the snail stays put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
    None,
}

/// Unit offsets `(row, col)` indexed by [`Direction::index`]
const DIRECTION_OFFSETS: [(i8, i8); 5] = [(0, -1), (0, 1), (-1, 0), (1, 0), (0, 0)];

impl Direction {
    /// Index into the offset table
    pub fn index(&self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
            Direction::Up => 2,
            Direction::Down => 3,
            Direction::None => 4,
        }
    }

    /// Unit vector `(row, col)` for this direction
    ///
    /// # Examples
    ///
    /// ```
    /// use snail_trail_types::Direction;
    ///
    /// assert_eq!(Direction::Up.offset(), (-1, 0));
    /// assert_eq!(Direction::Right.offset(), (0, 1));
    /// assert_eq!(Direction::None.offset(), (0, 0));
    /// ```
    pub fn offset(&self) -> (i8, i8) {
        DIRECTION_OFFSETS[self.index()]
    }

    /// Parse direction from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "none" => Some(Direction::None),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::None => "none",
        }
    }
}

/// One logical input from a keyboard or a replayed key log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerInput {
    /// Try to move the snail (or idle with `Direction::None`)
    Move(Direction),
    /// End the current game
    Quit,
}

impl PlayerInput {
    /// Parse an input token (a direction name or "quit")
    pub fn from_str(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("quit") {
            return Some(PlayerInput::Quit);
        }
        Direction::from_str(s).map(PlayerInput::Move)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerInput::Move(dir) => dir.as_str(),
            PlayerInput::Quit => "quit",
        }
    }
}

/// A garden coordinate, `row` first (0 = top wall)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Neighbouring position in the given direction
    pub fn step(&self, dir: Direction) -> Self {
        let (dr, dc) = dir.offset();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Whether this position lies inside the garden walls
    pub fn is_interior(&self) -> bool {
        self.row >= 1
            && self.row <= GARDEN_HEIGHT - 2
            && self.col >= 1
            && self.col <= GARDEN_WIDTH - 2
    }
}

/// Status line message shown after each turn
///
/// Ids follow the order of the console message table; `Moved` and `Pellet`
/// have no text of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
    Ready,
    TooManyPellets,
    LastLettuce,
    Lettuce,
    BlockedBySlime,
    Wall,
    HitFrog,
    InvalidKey,
    FrogGotYou,
    EagleGotFrog,
    Survived,
    RestInPeas,
    Moved,
    Pellet,
}

impl Message {
    pub const ALL: [Message; 14] = [
        Message::Ready,
        Message::TooManyPellets,
        Message::LastLettuce,
        Message::Lettuce,
        Message::BlockedBySlime,
        Message::Wall,
        Message::HitFrog,
        Message::InvalidKey,
        Message::FrogGotYou,
        Message::EagleGotFrog,
        Message::Survived,
        Message::RestInPeas,
        Message::Moved,
        Message::Pellet,
    ];

    /// Stable numeric id
    pub fn id(&self) -> u8 {
        match self {
            Message::Ready => 0,
            Message::TooManyPellets => 1,
            Message::LastLettuce => 2,
            Message::Lettuce => 3,
            Message::BlockedBySlime => 4,
            Message::Wall => 5,
            Message::HitFrog => 6,
            Message::InvalidKey => 7,
            Message::FrogGotYou => 8,
            Message::EagleGotFrog => 9,
            Message::Survived => 10,
            Message::RestInPeas => 11,
            Message::Moved => 12,
            Message::Pellet => 13,
        }
    }

    /// Text displayed on the status line
    ///
    /// # Examples
    ///
    /// ```
    /// use snail_trail_types::Message;
    ///
    /// assert_eq!(Message::Wall.text(), "THAT'S A WALL!");
    /// assert_eq!(Message::Moved.text(), "");
    /// ```
    pub fn text(&self) -> &'static str {
        match self {
            Message::Ready => "READY TO SLITHER!? PRESS A KEY...",
            Message::TooManyPellets => "TOO MANY PELLETS SLITHERED OVER!",
            Message::LastLettuce => "LAST LETTUCE EATEN",
            Message::Lettuce => "LETTUCE EATEN",
            Message::BlockedBySlime => "TRY A DIFFERENT DIRECTION",
            Message::Wall => "THAT'S A WALL!",
            Message::HitFrog => "OOPS! ENCOUNTERED A FROG!",
            Message::InvalidKey => "INVALID KEY",
            Message::FrogGotYou => "FROG GOT YOU!",
            Message::EagleGotFrog => "EAGLE GOT A FROG",
            Message::Survived => "WELL DONE, YOU'VE SURVIVED",
            Message::RestInPeas => "REST IN PEAS.",
            Message::Moved | Message::Pellet => "",
        }
    }

    /// Whether this message reports the end of the snail
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Message::TooManyPellets | Message::HitFrog | Message::FrogGotYou
        )
    }
}

/// What the snail did with the player's command this turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnailAction {
    /// Blocked by the garden wall
    HitWall,
    /// Slithered onto a frog (fatal)
    HitFrog,
    /// Slithered over a pellet
    HitPellet,
    /// Blocked by its own slime
    HitSlime,
    /// Moved onto blank ground or frog remains
    HitOther,
    /// Ate a lettuce
    HitLettuce,
    /// Slithered over the fatal pellet
    HitFinalPellet,
    /// Ate the last lettuce (win)
    HitFinalLettuce,
    /// No direction given
    NoMove,
}

impl SnailAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SnailAction::HitWall => "hitWall",
            SnailAction::HitFrog => "hitFrog",
            SnailAction::HitPellet => "hitPellet",
            SnailAction::HitSlime => "hitSlime",
            SnailAction::HitOther => "hitOther",
            SnailAction::HitLettuce => "hitLettuce",
            SnailAction::HitFinalPellet => "hitFinalPellet",
            SnailAction::HitFinalLettuce => "hitFinalLettuce",
            SnailAction::NoMove => "noMove",
        }
    }

    /// Whether the snail changed cells
    pub fn moved(&self) -> bool {
        !matches!(
            self,
            SnailAction::HitWall | SnailAction::HitSlime | SnailAction::NoMove
        )
    }
}

/// Something the garden did on its own during a turn
///
/// Frog indices are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    /// A frog landed on the snail
    FrogHitsSnail { frog: usize, at: Position },
    /// A frog landed somewhere harmless (blank, slime, lettuce, pellet, remains)
    FrogLanded { frog: usize, at: Position },
    /// An eagle carried a frog off
    EagleTookFrog { frog: usize, at: Position },
    /// The oldest slime deposit dissolved
    SlimeDissolved { at: Position },
}

impl GameEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameEvent::FrogHitsSnail { .. } => "frogHitsSnail",
            GameEvent::FrogLanded { .. } => "frogHitsOther",
            GameEvent::EagleTookFrog { .. } => "eagleEatsFrog",
            GameEvent::SlimeDissolved { .. } => "dissolveSlime",
        }
    }

    /// Where the event happened
    pub fn position(&self) -> Position {
        match *self {
            GameEvent::FrogHitsSnail { at, .. }
            | GameEvent::FrogLanded { at, .. }
            | GameEvent::EagleTookFrog { at, .. }
            | GameEvent::SlimeDissolved { at } => at,
        }
    }
}
