//! Core game logic module - pure, deterministic, and testable
//!
//! Everything that decides what happens in the garden lives here. There is no
//! terminal, keyboard or file I/O in this crate, so a game can be driven from a
//! renderer, a replay log or a test with identical results.
//!
//! # Module Structure
//!
//! - [`garden`]: the 20x30 walled grid of occupants
//! - [`creatures`]: the snail, the frogs and the frog leap rule
//! - [`slime`]: ring buffer that dissolves slime a fixed number of turns after it was laid
//! - [`game_state`]: one game, scattered from a seed, advanced one turn at a time
//! - [`rng`]: seeded randomness for the scatter and the eagle
//! - [`snapshot`]: copyable view of a game with a stable hash
//!
//! # Game Rules
//!
//! - **Slime**: the snail leaves slime behind it and cannot cross slime. Slime
//!   dissolves 25 turns after it was laid.
//! - **Pellets**: hidden in the garden; the fifth one poisons the snail.
//! - **Lettuces**: eating the fourth one wins the game.
//! - **Frogs**: two of them leap four cells toward the snail each turn, on both
//!   axes at once. A frog landing on the snail kills it.
//! - **Eagle**: each frog leap has a 1 in 32 chance of being its last.
//!
//! # Example
//!
//! ```
//! use snail_trail_core::GameState;
//! use snail_trail_types::Direction;
//!
//! let mut game = GameState::new(12345);
//! let outcome = game.step(Direction::Left);
//! assert_eq!(outcome.turn, 1);
//!
//! if !game.is_over() {
//!     game.step(Direction::Up);
//! }
//! game.finish();
//! assert!(game.is_over());
//! ```

pub mod creatures;
pub mod game_state;
pub mod garden;
pub mod rng;
pub mod slime;
pub mod snapshot;

pub use snail_trail_types as types;

// Re-export commonly used types for convenience
pub use creatures::{leap_toward, Frog, Snail};
pub use game_state::{GameEnd, GameState, GardenLayout, TurnOutcome, MAX_TURN_EVENTS};
pub use garden::Garden;
pub use rng::{RandomSource, SequenceRng, SimpleRng};
pub use slime::SlimeLedger;
pub use snapshot::GameSnapshot;
