//! Playback core: the single-session controller, its position-sync ticker
//! and the command queue that serializes gestures and engine events.

mod command;
mod controller;
mod ticker;

pub use command::{Command, CommandQueue};
pub use controller::{DEFAULT_TICK_MS, PlaybackController, PlaybackState};
