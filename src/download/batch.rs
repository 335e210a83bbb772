//! Download pipeline: login, list, then fetch each lesson in turn.

use std::path::Path;

use crate::api::{CamblyApi, Credentials, Lesson};
use crate::config::Config;
use crate::download::state::DownloadState;
use crate::download::stream::download_to_path;
use crate::error::Result;
use crate::fs::resolve_lesson_path;
use crate::output::{print_error, print_info, DownloadBar};

/// Run the whole download pipeline.
///
/// Login and listing errors propagate and abort the run before any file is
/// written. Once downloading starts, a failure on one lesson is reported and
/// the remaining lessons are still processed; the run completes either way.
pub async fn run_download(api: &CamblyApi, config: &Config) -> Result<DownloadState> {
    let credentials = Credentials {
        email: config.account.email.clone(),
        password: config.account.password.clone(),
    };

    let session = api.login(&credentials).await?;
    tracing::debug!("Logged in as user {}", session.user_id);

    let lessons = api.list_lessons(&session, config.options.limit).await?;
    print_info(&format!("Downloading {} files ...", lessons.len()));

    let destination_root = config.destination_dir();
    let mut state = DownloadState::default();

    // Lessons are fetched strictly one at a time so progress output stays
    // readable for one transfer.
    for lesson in &lessons {
        if let Err(e) = download_lesson(api, lesson, &destination_root, &mut state).await {
            state.record_failure();
            print_error(&format!("Failed to download {}: {}", lesson.video_url, e));
        }
    }

    Ok(state)
}

/// Resolve the destination and stream one lesson to disk.
async fn download_lesson(
    api: &CamblyApi,
    lesson: &Lesson,
    destination_root: &Path,
    state: &mut DownloadState,
) -> Result<()> {
    let path = resolve_lesson_path(lesson.start_time, destination_root)?;
    let destination = path.full_path();
    print_info(&format!("Downloading {}", destination.display()));

    let bar = DownloadBar::new();
    let bytes = download_to_path(api, &lesson.video_url, &destination, &bar).await?;

    state.record_success(bytes);
    Ok(())
}
