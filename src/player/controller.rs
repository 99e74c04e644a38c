use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use super::ticker::Ticker;
use crate::engine::AudioEngine;
use crate::error::PlayerError;
use crate::playlist::{Playlist, TrackRef};

/// Position-sync period in milliseconds.
pub const DEFAULT_TICK_MS: u64 = 1000;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Idle,
    Playing,
    Paused,
}

struct Session<H> {
    handle: H,
    track: TrackRef,
    duration_ms: u64,
}

/// Owns the one live engine handle and the playback state machine.
///
/// Invariant: at most one handle is open. Every path that opens a source
/// releases the previous one first, and dropping the controller releases
/// whatever is still held.
pub struct PlaybackController<E: AudioEngine> {
    engine: E,
    session: Option<Session<E::Handle>>,
    state: PlaybackState,
    ticker: Ticker,
    synced_position_ms: u64,
    completion_reported: bool,
}

impl<E: AudioEngine> PlaybackController<E> {
    #[cfg(test)]
    pub fn new(engine: E) -> Self {
        Self::with_tick(engine, Duration::from_millis(DEFAULT_TICK_MS))
    }

    pub fn with_tick(engine: E, period: Duration) -> Self {
        Self {
            engine,
            session: None,
            state: PlaybackState::Idle,
            ticker: Ticker::new(period),
            synced_position_ms: 0,
            completion_reported: false,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    #[cfg(test)]
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    pub fn current_track(&self) -> Option<&TrackRef> {
        self.session.as_ref().map(|s| &s.track)
    }

    /// Duration of the open track, 0 when idle or unknown.
    pub fn duration_ms(&self) -> u64 {
        self.session.as_ref().map_or(0, |s| s.duration_ms)
    }

    /// Position as of the last tick (or seek).
    pub fn synced_position_ms(&self) -> u64 {
        self.synced_position_ms
    }

    #[cfg(test)]
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_armed()
    }

    /// Open `track` and start playing it, returning its duration.
    ///
    /// Any open handle is released first. On failure the controller is left
    /// idle with nothing held.
    pub fn open(&mut self, track: TrackRef) -> Result<u64, PlayerError> {
        self.release();

        let mut handle = self
            .engine
            .open_source(track.uri())
            .map_err(|e| PlayerError::open(track.uri(), e))?;

        let duration_ms = self.engine.duration(&handle).as_millis() as u64;
        self.engine.start(&mut handle);

        info!(uri = track.uri(), duration_ms, "playing");
        self.session = Some(Session {
            handle,
            track,
            duration_ms,
        });
        self.state = PlaybackState::Playing;
        self.synced_position_ms = 0;
        self.completion_reported = false;
        self.ticker.arm(Instant::now());

        Ok(duration_ms)
    }

    /// Playing -> Paused. Returns whether anything changed.
    pub fn pause(&mut self) -> bool {
        if self.state != PlaybackState::Playing {
            return false;
        }
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        self.engine.pause(&mut session.handle);
        self.synced_position_ms = self.engine.position(&session.handle).as_millis() as u64;
        self.ticker.cancel();
        self.state = PlaybackState::Paused;
        true
    }

    /// Paused -> Playing. Returns whether anything changed.
    pub fn resume(&mut self) -> bool {
        if self.state != PlaybackState::Paused {
            return false;
        }
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        self.engine.start(&mut session.handle);
        self.ticker.arm(Instant::now());
        self.state = PlaybackState::Playing;
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        match self.state {
            PlaybackState::Playing => self.pause(),
            PlaybackState::Paused => self.resume(),
            PlaybackState::Idle => false,
        }
    }

    /// Jump to `position_ms`. The caller clamps to `[0, duration]`.
    pub fn seek(&mut self, position_ms: u64) -> Result<(), PlayerError> {
        let Some(session) = self.session.as_mut() else {
            return Err(PlayerError::NoActiveSession);
        };
        self.engine
            .seek_to(&mut session.handle, Duration::from_millis(position_ms))?;
        self.synced_position_ms = position_ms;
        self.completion_reported = false;
        Ok(())
    }

    pub fn current_position_ms(&self) -> u64 {
        self.session
            .as_ref()
            .map_or(0, |s| self.engine.position(&s.handle).as_millis() as u64)
    }

    /// Run the position-sync tick if it is due. Returns the synced position.
    pub fn tick(&mut self, now: Instant) -> Option<u64> {
        if self.state != PlaybackState::Playing {
            return None;
        }
        if !self.ticker.poll(now) {
            return None;
        }
        self.synced_position_ms = self.current_position_ms();
        Some(self.synced_position_ms)
    }

    pub fn time_to_next_tick(&self, now: Instant) -> Option<Duration> {
        self.ticker.remaining(now)
    }

    /// Report, once per opened source, that the engine played it to the end.
    pub fn poll_completion(&mut self) -> bool {
        if self.state != PlaybackState::Playing || self.completion_reported {
            return false;
        }
        let finished = self
            .session
            .as_ref()
            .is_some_and(|s| self.engine.is_finished(&s.handle));
        if finished {
            self.completion_reported = true;
        }
        finished
    }

    /// React to the end of the current track.
    ///
    /// With `auto_advance` the playlist moves on (wrapping, so a lone track
    /// starts over) and the new current track is opened. Otherwise the
    /// session is torn down.
    /// Ignored unless `poll_completion` reported the current source.
    pub fn on_natural_completion(
        &mut self,
        playlist: &mut Playlist,
        auto_advance: bool,
    ) -> Option<Result<u64, PlayerError>> {
        // Only the source that reported completion may trigger this.
        if !self.completion_reported {
            debug!("stale completion ignored");
            return None;
        }
        self.ticker.cancel();

        if auto_advance {
            if let Some(next) = playlist.advance().cloned() {
                debug!(next = next.uri(), "track finished, advancing");
                return Some(self.open(next));
            }
        }

        debug!("track finished, stopping");
        self.release();
        None
    }

    /// Stop ticking, free the handle and go idle. Safe to call repeatedly.
    pub fn release(&mut self) {
        self.ticker.cancel();
        if let Some(session) = self.session.take() {
            debug!(uri = session.track.uri(), "releasing source");
            self.engine.release(session.handle);
        }
        self.state = PlaybackState::Idle;
        self.synced_position_ms = 0;
        self.completion_reported = false;
    }
}

impl<E: AudioEngine> Drop for PlaybackController<E> {
    fn drop(&mut self) {
        if self.session.is_some() {
            warn!("controller dropped with an open source");
        }
        self.release();
    }
}
