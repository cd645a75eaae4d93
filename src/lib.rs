//! Snail Trail (workspace facade crate).
//!
//! Re-exports the workspace crates as `snail_trail::{core,engine,input,record,term,types}`
//! and holds the runtime configuration of the `snail-trail` binary.

pub mod config;

pub use snail_trail_core as core;
pub use snail_trail_engine as engine;
pub use snail_trail_input as input;
pub use snail_trail_record as record;
pub use snail_trail_term as term;
pub use snail_trail_types as types;
