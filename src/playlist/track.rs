use std::path::Path;

use lofty::prelude::*;

/// A user-picked audio resource.
///
/// `uri` is whatever the picker handed back (a filesystem path here). `name`
/// is the cached display name from the tag lookup, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRef {
    uri: String,
    name: Option<String>,
}

impl TrackRef {
    pub fn new(uri: impl Into<String>, name: Option<String>) -> Self {
        Self {
            uri: uri.into(),
            name: name.filter(|n| !n.trim().is_empty()),
        }
    }

    /// Build a `TrackRef` for `uri`, resolving its display name from tags.
    pub fn resolve(uri: impl Into<String>) -> Self {
        let uri = uri.into();
        let name = lookup_display_name(&uri);
        Self::new(uri, name)
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Cached name, else the last path segment of the uri.
    pub fn display_name(&self) -> &str {
        if let Some(name) = self.name.as_deref() {
            return name;
        }
        self.uri
            .split(['/', '\\'])
            .rev()
            .find(|seg| !seg.is_empty())
            .unwrap_or(&self.uri)
    }
}

fn make_display(title: &str, artist: Option<&str>) -> String {
    match artist {
        Some(a) if !a.trim().is_empty() => format!("{} - {}", a.trim(), title.trim()),
        _ => title.trim().to_string(),
    }
}

/// Look up a human readable name for `uri` from its tags ("Artist - Title").
///
/// Returns `None` when the file cannot be probed or carries no title.
pub fn lookup_display_name(uri: &str) -> Option<String> {
    let tagged = lofty::read_from_path(Path::new(uri)).ok()?;
    let tag = tagged.primary_tag().or_else(|| tagged.first_tag())?;

    let title = tag.title()?;
    if title.trim().is_empty() {
        return None;
    }
    let artist = tag.artist();
    Some(make_display(&title, artist.as_deref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn make_display_prefers_artist_dash_title() {
        assert_eq!(make_display("Song", Some("Artist")), "Artist - Song");
        assert_eq!(make_display("Song", Some("  Artist  ")), "Artist - Song");
        assert_eq!(make_display("Song", None), "Song");
        assert_eq!(make_display("Song", Some("   ")), "Song");
    }

    #[test]
    fn lookup_returns_none_for_untagged_or_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("noise.mp3");
        std::fs::write(&p, b"not really an mp3").unwrap();

        assert_eq!(lookup_display_name(p.to_str().unwrap()), None);
        assert_eq!(lookup_display_name("/definitely/not/here.ogg"), None);
    }
}
