//! Recording and replay
//!
//! - [`keylog`]: the seed and every input of a session, saved as JSON and
//!   played back through [`ReplayInput`]
//! - [`event_log`]: per-turn telemetry as JSON lines, written by [`EventRecorder`]
//! - [`protocol`]: serde mirrors of the game enums that fix their spelling on disk

pub mod event_log;
pub mod keylog;
pub mod protocol;

pub use snail_trail_core as core;
pub use snail_trail_engine as engine;
pub use snail_trail_types as types;

pub use event_log::{read_event_log, EventRecorder};
pub use keylog::{KeyLog, RecordingInput, ReplayInput};
pub use protocol::TurnRecord;
