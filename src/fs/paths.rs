//! Destination path resolution for lesson recordings.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};

use crate::error::{Error, Result};

/// Resolved destination for one recording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonPath {
    pub directory: PathBuf,
    pub filename: String,
}

impl LessonPath {
    /// Full path of the file to write.
    pub fn full_path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }
}

/// Resolve the destination path for a lesson and create its directory.
///
/// Layout: `<root>/<YYYY>/<MonthName>/lesson_<Weekday>_<YYYY-MM-DD>_<HHMM>.mp4`,
/// with all time fields taken from the local time zone. Safe to call twice
/// with the same inputs; an existing directory is not an error. Two lessons
/// starting in the same calendar minute resolve to the same filename.
pub fn resolve_lesson_path(start_time: i64, destination_root: &Path) -> Result<LessonPath> {
    let time = local_time(start_time)?;

    let directory = destination_root
        .join(time.format("%Y").to_string())
        .join(time.format("%B").to_string());
    std::fs::create_dir_all(&directory)?;

    let filename = time.format("lesson_%A_%Y-%m-%d_%H%M.mp4").to_string();

    Ok(LessonPath {
        directory,
        filename,
    })
}

fn local_time(start_time: i64) -> Result<DateTime<Local>> {
    Local
        .timestamp_opt(start_time, 0)
        .single()
        .ok_or(Error::InvalidTimestamp(start_time))
}
