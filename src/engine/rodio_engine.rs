//! `rodio`-backed engine: one `Sink` per opened source on a shared output stream.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use lofty::prelude::*;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};
use tracing::debug;

use super::AudioEngine;
use crate::error::EngineError;

pub struct RodioEngine {
    stream: OutputStream,
}

pub struct RodioHandle {
    sink: Sink,
    duration: Duration,
}

impl RodioEngine {
    /// Open the default output device.
    pub fn new() -> Result<Self, EngineError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| EngineError::Output(e.to_string()))?;
        // rodio logs to stderr when the stream is dropped, which garbles the TUI.
        stream.log_on_drop(false);
        Ok(Self { stream })
    }
}

/// Tag-level duration for formats whose decoder cannot report one.
fn probe_duration(path: &Path) -> Option<Duration> {
    let tagged = lofty::read_from_path(path).ok()?;
    let d = tagged.properties().duration();
    (!d.is_zero()).then_some(d)
}

impl AudioEngine for RodioEngine {
    type Handle = RodioHandle;

    fn open_source(&mut self, uri: &str) -> Result<RodioHandle, EngineError> {
        let path = Path::new(uri);
        let file = File::open(path)?;
        let source =
            Decoder::new(BufReader::new(file)).map_err(|e| EngineError::Decode(e.to_string()))?;

        let duration = source
            .total_duration()
            .or_else(|| probe_duration(path))
            .unwrap_or(Duration::ZERO);

        let sink = Sink::connect_new(self.stream.mixer());
        sink.pause();
        sink.append(source);
        debug!(uri, duration_ms = duration.as_millis() as u64, "source opened");

        Ok(RodioHandle { sink, duration })
    }

    fn start(&mut self, handle: &mut RodioHandle) {
        handle.sink.play();
    }

    fn pause(&mut self, handle: &mut RodioHandle) {
        handle.sink.pause();
    }

    fn position(&self, handle: &RodioHandle) -> Duration {
        handle.sink.get_pos()
    }

    fn duration(&self, handle: &RodioHandle) -> Duration {
        handle.duration
    }

    fn seek_to(&mut self, handle: &mut RodioHandle, pos: Duration) -> Result<(), EngineError> {
        handle
            .sink
            .try_seek(pos)
            .map_err(|e| EngineError::Seek(e.to_string()))
    }

    fn release(&mut self, handle: RodioHandle) {
        handle.sink.stop();
    }

    fn is_finished(&self, handle: &RodioHandle) -> bool {
        handle.sink.empty()
    }
}
