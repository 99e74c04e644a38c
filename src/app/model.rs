//! Application model: playlist, controller, picker and transient notices.
//!
//! Every gesture and engine event becomes a `Command` on one queue, and
//! `App::run_pending` applies them in order on the caller's thread.

use std::env;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::config::{PickerSettings, Settings};
use crate::engine::AudioEngine;
use crate::error::PlayerError;
use crate::picker::{PermissionGate, PickerOutcome, PickerState, scan_audio_files};
use crate::player::{Command, CommandQueue, PlaybackController};
use crate::playlist::{Playlist, TrackRef};

/// A short message shown in the status area until `expires_at`.
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub expires_at: Instant,
}

pub struct App<E: AudioEngine> {
    pub playlist: Playlist,
    pub controller: PlaybackController<E>,
    pub picker: Option<PickerState>,
    pub commands: CommandQueue,
    notice: Option<Notice>,
    gate: Box<dyn PermissionGate>,
    picker_settings: PickerSettings,
    auto_advance: bool,
    seek_step_ms: u64,
    notice_ttl: Duration,
    should_quit: bool,
}

impl<E: AudioEngine> App<E> {
    pub fn new(engine: E, gate: Box<dyn PermissionGate>, settings: &Settings) -> Self {
        let tick = Duration::from_millis(settings.playback.tick_interval_ms.max(1));
        Self {
            playlist: Playlist::new(),
            controller: PlaybackController::with_tick(engine, tick),
            picker: None,
            commands: CommandQueue::new(),
            notice: None,
            gate,
            picker_settings: settings.picker.clone(),
            auto_advance: settings.playback.auto_advance,
            seek_step_ms: settings.controls.seek_step_seconds.saturating_mul(1000),
            notice_ttl: Duration::from_millis(settings.ui.notice_ms),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn seek_step_ms(&self) -> u64 {
        self.seek_step_ms
    }

    pub fn push(&mut self, cmd: Command) {
        self.commands.push(cmd);
    }

    /// Apply every queued command, including ones queued while applying.
    pub fn run_pending(&mut self) {
        while let Some(cmd) = self.commands.pop() {
            self.dispatch(cmd);
        }
    }

    /// Periodic housekeeping: position sync, completion detection, notice expiry.
    pub fn on_tick(&mut self, now: Instant) {
        self.controller.tick(now);
        if self.controller.poll_completion() {
            self.commands.push(Command::Completed);
        }
        if self.notice.as_ref().is_some_and(|n| n.expires_at <= now) {
            self.notice = None;
        }
    }

    pub fn notify(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            expires_at: Instant::now() + self.notice_ttl,
        });
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dispatch(&mut self, cmd: Command) {
        debug!(?cmd, "dispatch");
        match cmd {
            Command::PlayCurrent => {
                if let Some(track) = self.playlist.current().cloned() {
                    self.open_track(track);
                }
            }
            Command::TogglePause => {
                self.controller.toggle_pause();
            }
            Command::SeekTo(ms) => self.seek_clamped(ms),
            Command::SeekBy(delta) => {
                let cur = self.controller.current_position_ms() as i64;
                let target = cur.saturating_add(delta).max(0) as u64;
                self.seek_clamped(target);
            }
            Command::SeekTenths(n) => {
                let dur = self.controller.duration_ms();
                if dur > 0 {
                    self.seek_clamped(dur / 10 * u64::from(n.min(10)));
                }
            }
            Command::Next => {
                if let Some(track) = self.playlist.advance().cloned() {
                    self.open_track(track);
                }
            }
            Command::Previous => {
                if let Some(track) = self.playlist.retreat().cloned() {
                    self.open_track(track);
                }
            }
            Command::Completed => {
                if let Some(Err(e)) = self
                    .controller
                    .on_natural_completion(&mut self.playlist, self.auto_advance)
                {
                    self.report(e);
                }
            }
            Command::AddTracks(tracks) => {
                let n = tracks.len();
                if n > 0 {
                    self.playlist.extend(tracks);
                    info!(added = n, total = self.playlist.size(), "tracks added");
                    self.notify(if n == 1 {
                        "Added 1 track".to_string()
                    } else {
                        format!("Added {n} tracks")
                    });
                }
            }
            Command::OpenPicker => self.open_picker(),
            Command::Quit => {
                self.controller.release();
                self.should_quit = true;
            }
        }
    }

    fn open_track(&mut self, track: TrackRef) {
        if let Err(e) = self.controller.open(track) {
            self.report(e);
        }
    }

    fn seek_clamped(&mut self, ms: u64) {
        let dur = self.controller.duration_ms();
        let target = if dur > 0 { ms.min(dur) } else { ms };
        if let Err(e) = self.controller.seek(target) {
            self.report(e);
        }
    }

    /// Route an error to the log and, where the user should know, a notice.
    fn report(&mut self, err: PlayerError) {
        match err {
            PlayerError::NoActiveSession => debug!("ignored: nothing is loaded"),
            PlayerError::PermissionDenied => {
                info!("media read permission denied");
                self.notify(err.to_string());
            }
            other => {
                warn!(error = %other, "playback error");
                self.notify(other.to_string());
            }
        }
    }

    fn picker_root(&self) -> PathBuf {
        self.picker_settings
            .start_dir
            .clone()
            .or_else(|| env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Show the picker, unless the gate refuses access to the media directory.
    fn open_picker(&mut self) {
        let root = self.picker_root();
        if let Err(e) = self.gate.check_read(&root) {
            self.report(e);
            return;
        }

        let entries = scan_audio_files(&root, &self.picker_settings);
        debug!(root = %root.display(), found = entries.len(), "picker opened");
        self.picker = Some(PickerState::new(
            root,
            entries,
            self.picker_settings.allow_multiple,
        ));
    }

    /// Close the picker and queue whatever was chosen.
    pub fn finish_picker(&mut self, outcome: PickerOutcome) {
        match outcome {
            PickerOutcome::Pending => {}
            PickerOutcome::Cancelled => self.picker = None,
            PickerOutcome::Chosen(uris) => {
                self.picker = None;
                self.add_uris(uris);
            }
        }
    }

    /// Queue resources picked outside the picker (e.g. command-line paths).
    pub fn add_uris(&mut self, uris: Vec<String>) {
        let tracks: Vec<TrackRef> = uris.into_iter().map(TrackRef::resolve).collect();
        if !tracks.is_empty() {
            self.commands.push(Command::AddTracks(tracks));
        }
    }
}
