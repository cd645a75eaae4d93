//! Session engine - drives one game from an input source to its end
//!
//! The core crate knows how to run a single turn. This crate owns the loop
//! around it: read one [`PlayerInput`], step the game, tell every observer,
//! and close the game when the snail dies, wins or the player quits.
//!
//! Inputs and observers are traits so the same loop serves the keyboard, a
//! replayed key log and tests.

pub mod session;

pub use snail_trail_core as core;
pub use snail_trail_types as types;

pub use session::{play_game, play_session, InputProvider, ScriptedInput, TurnObserver};
