//! Resource picking: the permission gate in front of the picker, the audio
//! file scan that feeds it and the modal picker state.

mod gate;
mod scan;
mod state;

pub use gate::{FsPermissionGate, PermissionGate};
pub use scan::scan_audio_files;
pub use state::{PickerOutcome, PickerState};

#[cfg(test)]
mod tests;
