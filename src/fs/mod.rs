//! Filesystem module.
//!
//! Provides destination path resolution and directory management.

pub mod paths;

pub use paths::{resolve_lesson_path, LessonPath};
