use super::track::TrackRef;

/// Ordered, append-only list of tracks with a wrapping cursor.
///
/// The cursor is `Some` exactly when the playlist is non-empty and is always
/// a valid index.
#[derive(Debug, Default, Clone)]
pub struct Playlist {
    tracks: Vec<TrackRef>,
    cursor: Option<usize>,
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `track`. The first track added becomes current.
    pub fn add(&mut self, track: TrackRef) {
        self.tracks.push(track);
        if self.cursor.is_none() {
            self.cursor = Some(0);
        }
    }

    pub fn extend(&mut self, tracks: impl IntoIterator<Item = TrackRef>) {
        for t in tracks {
            self.add(t);
        }
    }

    pub fn current(&self) -> Option<&TrackRef> {
        self.cursor.and_then(|i| self.tracks.get(i))
    }

    /// Move to the next track, wrapping past the end.
    pub fn advance(&mut self) -> Option<&TrackRef> {
        let len = self.tracks.len();
        let cur = self.cursor?;
        self.cursor = Some((cur + 1) % len);
        self.current()
    }

    /// Move to the previous track, wrapping past the start.
    pub fn retreat(&mut self) -> Option<&TrackRef> {
        let len = self.tracks.len();
        let cur = self.cursor?;
        self.cursor = Some((cur + len - 1) % len);
        self.current()
    }

    pub fn size(&self) -> usize {
        self.tracks.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn tracks(&self) -> &[TrackRef] {
        &self.tracks
    }
}
