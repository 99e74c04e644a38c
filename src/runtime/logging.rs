//! File-backed `tracing` subscriber; stderr belongs to the TUI.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use tracing_subscriber::EnvFilter;

use crate::config::{LoggingSettings, default_log_path};

pub fn init(settings: &LoggingSettings) {
    let Some(path) = settings.file.clone().or_else(default_log_path) else {
        return;
    };
    let file = match open_log_file(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("ripple: logging disabled, cannot open {}: {e}", path.display());
            return;
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.filter));
    let writer = Arc::new(Mutex::new(file));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(move || FileLogWriter::new(Arc::clone(&writer)))
        .try_init();
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

struct FileLogWriter {
    file: Arc<Mutex<File>>,
}

impl FileLogWriter {
    fn new(file: Arc<Mutex<File>>) -> Self {
        Self { file }
    }
}

impl Write for FileLogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_log_file_creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("ripple").join("ripple.log");
        let mut f = open_log_file(&path).unwrap();
        f.write_all(b"line\n").unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn file_log_writer_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ripple.log");
        let file = Arc::new(Mutex::new(open_log_file(&path).unwrap()));

        let mut w = FileLogWriter::new(Arc::clone(&file));
        w.write_all(b"one\n").unwrap();
        let mut w2 = FileLogWriter::new(file);
        w2.write_all(b"two\n").unwrap();
        w2.flush().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }
}
