use std::fs;
use std::path::PathBuf;

use tempfile::tempdir;

use super::*;
use crate::config::PickerSettings;
use crate::error::PlayerError;

fn names(files: &[PathBuf]) -> Vec<String> {
    files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn scan_filters_non_audio_and_sorts_case_insensitive() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("b.MP3"), b"not a real mp3").unwrap();
    fs::write(dir.path().join("A.ogg"), b"not a real ogg").unwrap();
    fs::write(dir.path().join("c.txt"), b"ignore me").unwrap();

    let files = scan_audio_files(dir.path(), &PickerSettings::default());
    assert_eq!(names(&files), vec!["A.ogg", "b.MP3"]);
}

#[test]
fn scan_skips_hidden_by_default() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".hidden.mp3"), b"x").unwrap();
    fs::write(dir.path().join("visible.mp3"), b"x").unwrap();
    let hidden_dir = dir.path().join(".cache");
    fs::create_dir_all(&hidden_dir).unwrap();
    fs::write(hidden_dir.join("inside.mp3"), b"x").unwrap();

    let files = scan_audio_files(dir.path(), &PickerSettings::default());
    assert_eq!(names(&files), vec!["visible.mp3"]);

    let settings = PickerSettings {
        include_hidden: true,
        ..PickerSettings::default()
    };
    assert_eq!(scan_audio_files(dir.path(), &settings).len(), 3);
}

#[test]
fn scan_respects_recursive_false_and_max_depth() {
    let dir = tempdir().unwrap();
    let d1 = dir.path().join("d1");
    let d2 = d1.join("d2");
    fs::create_dir_all(&d2).unwrap();
    fs::write(dir.path().join("root.mp3"), b"x").unwrap();
    fs::write(d1.join("one.mp3"), b"x").unwrap();
    fs::write(d2.join("two.mp3"), b"x").unwrap();

    let flat = PickerSettings {
        recursive: false,
        ..PickerSettings::default()
    };
    assert_eq!(names(&scan_audio_files(dir.path(), &flat)), vec!["root.mp3"]);

    // WalkDir depth counts root as 0, so depth 2 reaches d1/* but not d1/d2/*.
    let capped = PickerSettings {
        max_depth: Some(2),
        ..PickerSettings::default()
    };
    let got = names(&scan_audio_files(dir.path(), &capped));
    assert!(got.contains(&"root.mp3".to_string()));
    assert!(got.contains(&"one.mp3".to_string()));
    assert!(!got.contains(&"two.mp3".to_string()));
}

#[test]
fn fs_gate_allows_readable_dir_and_reports_missing_one() {
    let dir = tempdir().unwrap();
    assert!(FsPermissionGate.check_read(dir.path()).is_ok());

    let missing = dir.path().join("nope");
    assert!(matches!(
        FsPermissionGate.check_read(&missing),
        Err(PlayerError::Io(_))
    ));
}

fn picker(n: usize, multi: bool) -> PickerState {
    let root = PathBuf::from("/music");
    let entries = (0..n).map(|i| root.join(format!("t{i}.mp3"))).collect();
    PickerState::new(root, entries, multi)
}

#[test]
fn confirm_without_marks_picks_cursor_entry() {
    let mut p = picker(3, true);
    p.next();
    assert_eq!(
        p.confirm(),
        PickerOutcome::Chosen(vec!["/music/t1.mp3".to_string()])
    );
    assert_eq!(p.label(1), "t1.mp3");
}

#[test]
fn marks_are_returned_in_list_order() {
    let mut p = picker(4, true);
    p.last();
    p.toggle_mark();
    p.first();
    p.toggle_mark();
    p.next();
    p.toggle_mark();
    p.toggle_mark();

    assert_eq!(p.marked_count(), 2);
    assert_eq!(
        p.confirm(),
        PickerOutcome::Chosen(vec![
            "/music/t0.mp3".to_string(),
            "/music/t3.mp3".to_string()
        ])
    );
}

#[test]
fn single_pick_mode_ignores_marks_and_cursor_stays_in_range() {
    let mut p = picker(2, false);
    p.toggle_mark();
    assert_eq!(p.marked_count(), 0);

    p.prev();
    assert_eq!(p.cursor(), 0);
    p.next();
    p.next();
    p.next();
    assert_eq!(p.cursor(), 1);
}

#[test]
fn empty_picker_confirms_nothing() {
    let p = picker(0, true);
    assert!(p.is_empty());
    assert_eq!(p.confirm(), PickerOutcome::Chosen(Vec::new()));
    assert_eq!(p.cancel(), PickerOutcome::Cancelled);
}
