//! Streaming transfer of one recording to disk.

use std::path::Path;

use futures::StreamExt;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::api::CamblyApi;
use crate::error::{Error, Result};
use crate::output::ProgressSink;

/// Stream a recording to `destination`, reporting progress per chunk.
///
/// Chunks are written as they arrive, so memory use is bounded regardless of
/// file size. On failure a partially written file is left in place; there is
/// no resume, the pipeline decides whether to continue with other items.
/// Returns the number of bytes written.
pub async fn download_to_path(
    api: &CamblyApi,
    url: &str,
    destination: &Path,
    sink: &dyn ProgressSink,
) -> Result<u64> {
    let response = api.fetch_recording(url).await?;

    let total_bytes = response.content_length().unwrap_or(0);
    sink.begin(total_bytes);

    let mut file = File::create(destination).await?;
    let mut stream = response.bytes_stream();
    let mut bytes_read: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::Download(format!("stream interrupted: {}", e)))?;
        file.write_all(&chunk).await?;
        bytes_read += chunk.len() as u64;
        sink.advance(bytes_read, total_bytes);
    }

    file.flush().await?;
    sink.done();

    Ok(bytes_read)
}
