use crate::{
    api::YouTubeApi,
    error::YtfillError,
    types::{PlaylistSummary, VideoRef},
};

/// Hard cap on playlist length imposed by the platform.
pub const PLAYLIST_CAPACITY: u64 = 5000;

/// What happened to one accepted video during the append phase.
#[derive(Debug)]
pub enum InsertOutcome {
    Added,
    Failed(YtfillError),
    SkippedForSize,
}

#[derive(Debug, Default)]
pub struct AppendReport {
    pub added: Vec<VideoRef>,
    pub failed: Vec<(VideoRef, YtfillError)>,
    pub skipped_for_size: Vec<VideoRef>,
}

/// Insert accepted videos into the playlist one call at a time.
///
/// The allowance is fixed up front from the playlist's current item count;
/// videos past it are skipped rather than errored. A failed insertion is
/// recorded and never aborts the remaining ones. `on_result` fires after
/// every video so callers can drive progress output.
pub async fn append_all<A: YouTubeApi>(
    api: &A,
    playlist: &PlaylistSummary,
    accepted: &[VideoRef],
    mut on_result: impl FnMut(&VideoRef, &InsertOutcome),
) -> AppendReport {
    let allowance = PLAYLIST_CAPACITY.saturating_sub(playlist.item_count) as usize;
    let mut report = AppendReport::default();

    for (index, video) in accepted.iter().enumerate() {
        let outcome = if index < allowance {
            match api.insert_playlist_item(&playlist.id, &video.id).await {
                Ok(()) => InsertOutcome::Added,
                Err(e) => InsertOutcome::Failed(e),
            }
        } else {
            InsertOutcome::SkippedForSize
        };

        on_result(video, &outcome);
        match outcome {
            InsertOutcome::Added => report.added.push(video.clone()),
            InsertOutcome::Failed(e) => report.failed.push((video.clone(), e)),
            InsertOutcome::SkippedForSize => report.skipped_for_size.push(video.clone()),
        }
    }

    report
}
