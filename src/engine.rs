//! Decoder/output engine seam.
//!
//! The player never decodes audio itself. It drives an `AudioEngine`, which
//! hands out one opaque handle per opened source. `RodioEngine` is the real
//! implementation; tests use an in-memory fake.

mod rodio_engine;

use std::time::Duration;

use crate::error::EngineError;

pub use rodio_engine::RodioEngine;

/// Capabilities the playback controller needs from the audio backend.
pub trait AudioEngine {
    type Handle;

    /// Probe and prepare `uri` for playback. The returned handle is paused.
    fn open_source(&mut self, uri: &str) -> Result<Self::Handle, EngineError>;
    fn start(&mut self, handle: &mut Self::Handle);
    fn pause(&mut self, handle: &mut Self::Handle);
    fn position(&self, handle: &Self::Handle) -> Duration;
    /// Total length, `Duration::ZERO` when the backend cannot tell.
    fn duration(&self, handle: &Self::Handle) -> Duration;
    fn seek_to(&mut self, handle: &mut Self::Handle, pos: Duration) -> Result<(), EngineError>;
    /// Stop output and free everything tied to `handle`.
    fn release(&mut self, handle: Self::Handle);
    /// True once the source has played to its end.
    fn is_finished(&self, handle: &Self::Handle) -> bool;
}

#[cfg(test)]
pub(crate) mod fake;
