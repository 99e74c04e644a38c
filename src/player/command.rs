use std::collections::VecDeque;

use crate::playlist::TrackRef;

/// One unit of work for the player, from a key press or from the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// (Re)open the playlist's current track from the start.
    PlayCurrent,
    TogglePause,
    /// Absolute seek in milliseconds.
    SeekTo(u64),
    /// Relative seek in milliseconds, positive or negative.
    SeekBy(i64),
    /// Seek to `n` tenths of the track (seek-bar style jump).
    SeekTenths(u8),
    Next,
    Previous,
    /// The engine reached the end of the current track.
    Completed,
    AddTracks(Vec<TrackRef>),
    OpenPicker,
    Quit,
}

/// FIFO shared by user gestures and engine events, drained by the event loop.
#[derive(Debug, Default)]
pub struct CommandQueue {
    pending: VecDeque<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cmd: Command) {
        self.pending.push_back(cmd);
    }

    pub fn pop(&mut self) -> Option<Command> {
        self.pending.pop_front()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
