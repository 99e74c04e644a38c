use std::fs;
use std::io;
use std::path::Path;

use crate::error::PlayerError;

/// Confirms read access to media before the picker is shown.
pub trait PermissionGate {
    fn check_read(&self, dir: &Path) -> Result<(), PlayerError>;
}

/// Grants access when the directory can actually be listed.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsPermissionGate;

impl PermissionGate for FsPermissionGate {
    fn check_read(&self, dir: &Path) -> Result<(), PlayerError> {
        match fs::read_dir(dir) {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                Err(PlayerError::PermissionDenied)
            }
            Err(e) => Err(PlayerError::Io(e)),
        }
    }
}
