//! Cambly Downloader - save your lesson recordings locally.
//!
//! This library logs in to a Cambly account, lists the student's chats that
//! carry a lesson recording, and streams each recording to a local
//! `<root>/<year>/<month>/` layout with per-download progress.
//!
//! # Example
//!
//! ```no_run
//! use cambly_downloader::{run_download, CamblyApi, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::default();
//!     config.account.email = "student@example.com".into();
//!     config.account.password = "secret".into();
//!
//!     let api = CamblyApi::new(&config.account.user_agent)?;
//!     let state = run_download(&api, &config).await?;
//!     println!("downloaded {} lessons", state.downloaded);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod output;

// Re-exports for convenience
pub use api::{CamblyApi, Credentials, Lesson, Session};
pub use config::{validate_config, Config};
pub use download::{run_download, DownloadState};
pub use error::{Error, Result};
pub use fs::{resolve_lesson_path, LessonPath};
