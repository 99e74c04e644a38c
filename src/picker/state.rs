use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Result of a picker interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    /// Still open.
    Pending,
    /// Zero, one or many resource uris, in list order.
    Chosen(Vec<String>),
    Cancelled,
}

/// Modal file picker over a pre-scanned list of audio files.
#[derive(Debug, Clone)]
pub struct PickerState {
    root: PathBuf,
    entries: Vec<PathBuf>,
    cursor: usize,
    marked: BTreeSet<usize>,
    allow_multiple: bool,
}

impl PickerState {
    pub fn new(root: PathBuf, entries: Vec<PathBuf>, allow_multiple: bool) -> Self {
        Self {
            root,
            entries,
            cursor: 0,
            marked: BTreeSet::new(),
            allow_multiple,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn allow_multiple(&self) -> bool {
        self.allow_multiple
    }

    pub fn is_marked(&self, i: usize) -> bool {
        self.marked.contains(&i)
    }

    pub fn marked_count(&self) -> usize {
        self.marked.len()
    }

    /// Entry path relative to the picker root, for display.
    pub fn label(&self, i: usize) -> String {
        self.entries
            .get(i)
            .map(|p| p.strip_prefix(&self.root).unwrap_or(p).display().to_string())
            .unwrap_or_default()
    }

    pub fn next(&mut self) {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
        }
    }

    pub fn prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn first(&mut self) {
        self.cursor = 0;
    }

    pub fn last(&mut self) {
        self.cursor = self.entries.len().saturating_sub(1);
    }

    /// Mark or unmark the entry under the cursor. Ignored in single-pick mode.
    pub fn toggle_mark(&mut self) {
        if !self.allow_multiple || self.entries.is_empty() {
            return;
        }
        if !self.marked.remove(&self.cursor) {
            self.marked.insert(self.cursor);
        }
    }

    /// Marked entries if any, otherwise the entry under the cursor.
    pub fn confirm(&self) -> PickerOutcome {
        let picked: Vec<String> = if self.marked.is_empty() {
            self.entries
                .get(self.cursor)
                .map(|p| p.to_string_lossy().into_owned())
                .into_iter()
                .collect()
        } else {
            self.marked
                .iter()
                .filter_map(|&i| self.entries.get(i))
                .map(|p| p.to_string_lossy().into_owned())
                .collect()
        };
        PickerOutcome::Chosen(picked)
    }

    pub fn cancel(&self) -> PickerOutcome {
        PickerOutcome::Cancelled
    }
}
