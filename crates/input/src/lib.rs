//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto [`crate::types::PlayerInput`] and provides
//! [`KeyboardInput`], a blocking [`InputProvider`](crate::engine::InputProvider)
//! that turns one key press into one turn.

pub mod keyboard;
pub mod map;

pub use snail_trail_engine as engine;
pub use snail_trail_types as types;

pub use keyboard::KeyboardInput;
pub use map::{map_key_event, should_quit};
