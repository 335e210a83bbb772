//! Download run statistics.

/// Counters for one download run.
#[derive(Debug, Default)]
pub struct DownloadState {
    pub downloaded: u64,
    pub failed: u64,
    pub bytes: u64,
}

impl DownloadState {
    /// Record a completed download of `bytes` bytes.
    pub fn record_success(&mut self, bytes: u64) {
        self.downloaded += 1;
        self.bytes += bytes;
    }

    /// Record a failed download.
    pub fn record_failure(&mut self) {
        self.failed += 1;
    }

    /// Number of lessons the run attempted.
    pub fn total_attempted(&self) -> u64 {
        self.downloaded + self.failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let mut state = DownloadState::default();
        state.record_success(100);
        state.record_success(200);
        state.record_failure();

        assert_eq!(state.downloaded, 2);
        assert_eq!(state.failed, 1);
        assert_eq!(state.bytes, 300);
        assert_eq!(state.total_attempted(), 3);
    }
}
