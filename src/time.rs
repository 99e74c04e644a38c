//! Clock-style formatting for positions and durations.

/// Format `ms` as `MM:SS`.
///
/// Minutes are not wrapped into hours, so long tracks render as e.g. `125:03`.
pub fn format_mmss(ms: u64) -> String {
    let minutes = ms / 60_000;
    let seconds = (ms / 1000) % 60;
    format!("{:02}:{:02}", minutes, seconds)
}
