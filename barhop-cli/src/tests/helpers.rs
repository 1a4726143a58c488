//! Temporary workspaces and catalog files for CLI tests.

use barhop_core::{OpeningHours, Venue, WeeklySchedule};
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

/// A temporary directory and its UTF-8 path; keep the guard alive.
pub(super) fn workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// Two venues open 17:00 to 02:00 every day.
pub(super) fn custom_venues() -> Vec<Venue> {
    let hours = WeeklySchedule::every_day(OpeningHours::from_hours(17, 2));
    vec![
        Venue::new("Nightjar", 60, 5, 20, hours),
        Venue::new("Lark", 40, 1, 2, hours),
    ]
}

/// Write [`custom_venues`] as a catalog file at `path`.
pub(super) fn write_custom_catalog(path: &Utf8Path) {
    let payload = serde_json::to_string_pretty(&custom_venues()).expect("serialize catalog");
    write_utf8(path, payload.as_bytes());
}
