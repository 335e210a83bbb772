//! Progress reporting for streaming downloads.

use indicatif::{ProgressBar, ProgressStyle};

/// Sink for download progress events.
///
/// One sink instance is owned by one in-flight transfer; the downloader calls
/// `begin` once the content length is known, `advance` per received chunk, and
/// `done` after the last byte is written.
pub trait ProgressSink {
    fn begin(&self, total_bytes: u64);
    fn advance(&self, bytes_read: u64, total_bytes: u64);
    fn done(&self);
}

/// Terminal progress bar backed by indicatif.
pub struct DownloadBar {
    bar: ProgressBar,
}

impl DownloadBar {
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
                .unwrap()
                .progress_chars("#>-"),
        );
        Self { bar }
    }
}

impl Default for DownloadBar {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for DownloadBar {
    fn begin(&self, total_bytes: u64) {
        self.bar.set_length(total_bytes);
        self.bar.set_position(0);
    }

    fn advance(&self, bytes_read: u64, _total_bytes: u64) {
        self.bar.set_position(bytes_read);
    }

    fn done(&self) {
        self.bar.finish_and_clear();
    }
}

/// Sink that discards all progress events.
pub struct SilentSink;

impl ProgressSink for SilentSink {
    fn begin(&self, _total_bytes: u64) {}
    fn advance(&self, _bytes_read: u64, _total_bytes: u64) {}
    fn done(&self) {}
}
