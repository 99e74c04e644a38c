//! In-memory engine for tests. Clones share state so a test can keep a
//! handle on the engine after moving it into a controller.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use super::AudioEngine;
use crate::error::EngineError;

#[derive(Clone, Default)]
pub(crate) struct FakeEngine {
    state: Rc<RefCell<FakeState>>,
}

#[derive(Default)]
struct FakeState {
    durations: HashMap<String, u64>,
    voices: HashMap<u64, Voice>,
    next_id: u64,
    opened: Vec<String>,
    released: Vec<String>,
}

struct Voice {
    uri: String,
    position_ms: u64,
    duration_ms: u64,
    playing: bool,
    finished: bool,
}

pub(crate) struct FakeHandle {
    id: u64,
}

impl FakeEngine {
    /// Engine that can open exactly the listed `(uri, duration_ms)` sources.
    pub(crate) fn with_tracks(tracks: &[(&str, u64)]) -> Self {
        let engine = Self::default();
        {
            let mut st = engine.state.borrow_mut();
            for (uri, ms) in tracks {
                st.durations.insert(uri.to_string(), *ms);
            }
        }
        engine
    }

    pub(crate) fn live_handles(&self) -> usize {
        self.state.borrow().voices.len()
    }

    pub(crate) fn opened(&self) -> Vec<String> {
        self.state.borrow().opened.clone()
    }

    pub(crate) fn released(&self) -> Vec<String> {
        self.state.borrow().released.clone()
    }

    pub(crate) fn is_playing(&self) -> bool {
        self.state.borrow().voices.values().any(|v| v.playing)
    }

    /// Let playing voices run for `ms`, finishing those that reach the end.
    pub(crate) fn play_for(&self, ms: u64) {
        let mut st = self.state.borrow_mut();
        for v in st.voices.values_mut().filter(|v| v.playing) {
            v.position_ms = (v.position_ms + ms).min(v.duration_ms);
            if v.position_ms == v.duration_ms {
                v.finished = true;
                v.playing = false;
            }
        }
    }
}

impl AudioEngine for FakeEngine {
    type Handle = FakeHandle;

    fn open_source(&mut self, uri: &str) -> Result<FakeHandle, EngineError> {
        let mut st = self.state.borrow_mut();
        let Some(&duration_ms) = st.durations.get(uri) else {
            return Err(EngineError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "no such file",
            )));
        };
        let id = st.next_id;
        st.next_id += 1;
        st.opened.push(uri.to_string());
        st.voices.insert(
            id,
            Voice {
                uri: uri.to_string(),
                position_ms: 0,
                duration_ms,
                playing: false,
                finished: false,
            },
        );
        Ok(FakeHandle { id })
    }

    fn start(&mut self, handle: &mut FakeHandle) {
        if let Some(v) = self.state.borrow_mut().voices.get_mut(&handle.id) {
            v.playing = !v.finished;
        }
    }

    fn pause(&mut self, handle: &mut FakeHandle) {
        if let Some(v) = self.state.borrow_mut().voices.get_mut(&handle.id) {
            v.playing = false;
        }
    }

    fn position(&self, handle: &FakeHandle) -> Duration {
        let st = self.state.borrow();
        Duration::from_millis(st.voices.get(&handle.id).map_or(0, |v| v.position_ms))
    }

    fn duration(&self, handle: &FakeHandle) -> Duration {
        let st = self.state.borrow();
        Duration::from_millis(st.voices.get(&handle.id).map_or(0, |v| v.duration_ms))
    }

    fn seek_to(&mut self, handle: &mut FakeHandle, pos: Duration) -> Result<(), EngineError> {
        let mut st = self.state.borrow_mut();
        let v = st
            .voices
            .get_mut(&handle.id)
            .ok_or_else(|| EngineError::Seek("stale handle".into()))?;
        v.position_ms = (pos.as_millis() as u64).min(v.duration_ms);
        v.finished = false;
        Ok(())
    }

    fn release(&mut self, handle: FakeHandle) {
        let mut st = self.state.borrow_mut();
        if let Some(v) = st.voices.remove(&handle.id) {
            st.released.push(v.uri);
        }
    }

    fn is_finished(&self, handle: &FakeHandle) -> bool {
        let st = self.state.borrow();
        st.voices.get(&handle.id).is_some_and(|v| v.finished)
    }
}
