//! Terminal "game renderer" module.
//!
//! Renders into a simple framebuffer that is diff-flushed to the terminal,
//! rather than printing the garden line by line every turn.
//!
//! - [`fb`]: styled character cells
//! - [`game_view`]: pure mapping from a [`GameSnapshot`](crate::core::GameSnapshot) to a
//!   framebuffer
//! - [`renderer`]: crossterm output
//! - [`frame_stats`]: per-turn update+render timing
//! - [`screen`]: all of the above as a session observer

pub mod fb;
pub mod frame_stats;
pub mod game_view;
pub mod renderer;
pub mod screen;

pub use snail_trail_core as core;
pub use snail_trail_engine as engine;
pub use snail_trail_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use frame_stats::{frame_rate_label, FrameStats};
pub use game_view::{GameView, HudView, Viewport, PROMPT, TITLE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screen::TerminalScreen;
