//! Download module.
//!
//! This module provides:
//! - The sequential download pipeline
//! - Streaming file transfer with progress reporting
//! - Run statistics

pub mod batch;
pub mod state;
pub mod stream;

pub use batch::run_download;
pub use state::DownloadState;
pub use stream::download_to_path;
