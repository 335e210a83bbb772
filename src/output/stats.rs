//! End-of-run statistics reporting.

use console::style;

use crate::download::DownloadState;

/// Print the final run summary.
pub fn print_run_summary(state: &DownloadState) {
    println!();
    println!("{}", style("Run complete:").bold());
    println!(
        "  Downloaded: {} of {} lessons",
        state.downloaded,
        state.total_attempted()
    );
    if state.failed > 0 {
        println!("  Failed: {}", state.failed);
    }
    println!("  Total size: {} bytes", state.bytes);
}
