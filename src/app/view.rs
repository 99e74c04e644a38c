use crate::engine::AudioEngine;
use crate::player::{PlaybackController, PlaybackState};
use crate::playlist::Playlist;
use crate::time::format_mmss;

/// Everything the now-playing panel shows, derived from controller state.
#[derive(Debug, Clone, PartialEq)]
pub struct NowPlayingView {
    pub state: &'static str,
    pub title: String,
    /// `"i/N"` playlist position.
    pub count: String,
    pub elapsed: String,
    pub total: String,
    /// Seek-bar fill in `[0, 1]`.
    pub ratio: f64,
}

impl NowPlayingView {
    pub fn build<E: AudioEngine>(controller: &PlaybackController<E>, playlist: &Playlist) -> Self {
        let state = match controller.state() {
            PlaybackState::Idle => "Idle",
            PlaybackState::Playing => "Playing",
            PlaybackState::Paused => "Paused",
        };

        let title = controller
            .current_track()
            .or_else(|| playlist.current())
            .map(|t| t.display_name().to_string())
            .unwrap_or_else(|| "No track selected".to_string());

        let count = match playlist.cursor() {
            Some(i) => format!("{}/{}", i + 1, playlist.size()),
            None => "0/0".to_string(),
        };

        let position = controller.synced_position_ms();
        let duration = controller.duration_ms();
        let ratio = if duration > 0 {
            (position as f64 / duration as f64).clamp(0.0, 1.0)
        } else {
            0.0
        };

        Self {
            state,
            title,
            count,
            elapsed: format_mmss(position),
            total: format_mmss(duration),
            ratio,
        }
    }
}
