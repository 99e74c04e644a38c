//! Error types shared by the playback core and the picker.

use thiserror::Error;

/// Failures raised by an [`AudioEngine`](crate::engine::AudioEngine).
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("cannot read source: {0}")]
    Io(#[from] std::io::Error),
    #[error("unsupported or corrupt audio: {0}")]
    Decode(String),
    #[error("seek failed: {0}")]
    Seek(String),
    #[error("audio output unavailable: {0}")]
    Output(String),
}

/// Errors surfaced by player operations.
///
/// `NoActiveSession` is never shown to the user; callers treat it as a no-op.
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("Permission denied")]
    PermissionDenied,
    #[error("cannot open {uri}: {reason}")]
    Open { uri: String, reason: String },
    #[error("nothing is loaded")]
    NoActiveSession,
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PlayerError {
    pub(crate) fn open(uri: &str, err: EngineError) -> Self {
        Self::Open {
            uri: uri.to_string(),
            reason: err.to_string(),
        }
    }
}
