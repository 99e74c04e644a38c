//! Playlist module: the short, in-memory list of picked tracks.
//!
//! `TrackRef` identifies one picked resource, `Playlist` keeps them in
//! insertion order with a wrapping cursor.

mod model;
mod track;

pub use model::Playlist;
pub use track::TrackRef;
