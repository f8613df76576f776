use std::collections::HashMap;
use std::time::Duration;

use tokio::time::sleep;

use crate::{
    api::{VIDEO_BATCH_SIZE, VideoItem, YouTubeApi},
    duration::parse_iso8601_duration,
    error::Result,
    types::{DurationBounds, RejectReason, Verdict, VideoRef},
};

/// Classifies video references as accepted or rejected, batch by batch.
///
/// The output always has the same length and order as the input, so verdicts
/// can be reported against the original lines.
pub struct Validator {
    bounds: DurationBounds,
    batch_size: usize,
    max_attempts: u32,
    backoff: Duration,
}

impl Validator {
    pub fn new(bounds: DurationBounds) -> Self {
        Self {
            bounds,
            batch_size: VIDEO_BATCH_SIZE,
            max_attempts: 3,
            backoff: Duration::from_millis(500),
        }
    }

    /// Classify every reference in input order.
    ///
    /// `on_batch` runs after each batch completes so callers can advance
    /// progress reporting.
    pub async fn classify_all<A: YouTubeApi>(
        &self,
        api: &A,
        refs: &[VideoRef],
        mut on_batch: impl FnMut(&[Verdict]),
    ) -> Vec<Verdict> {
        let mut verdicts = Vec::with_capacity(refs.len());
        for batch in refs.chunks(self.batch_size) {
            let batch_verdicts = self.classify_batch(api, batch).await;
            on_batch(&batch_verdicts);
            verdicts.extend(batch_verdicts);
        }
        verdicts
    }

    async fn classify_batch<A: YouTubeApi>(&self, api: &A, batch: &[VideoRef]) -> Vec<Verdict> {
        let ids: Vec<String> = batch.iter().map(|v| v.id.clone()).collect();
        let items = match self.fetch_with_retry(api, &ids).await {
            Ok(items) => items,
            // The whole batch degrades to unavailable; the run keeps going.
            Err(_) => {
                return batch
                    .iter()
                    .map(|v| Verdict::rejected(v.clone(), RejectReason::Unavailable))
                    .collect();
            }
        };

        let by_id: HashMap<&str, &VideoItem> =
            items.iter().map(|item| (item.id.as_str(), item)).collect();

        batch
            .iter()
            .map(|video| match by_id.get(video.id.as_str()) {
                Some(item) => self.classify_one(video, item),
                None => Verdict::rejected(video.clone(), RejectReason::NotFound),
            })
            .collect()
    }

    async fn fetch_with_retry<A: YouTubeApi>(
        &self,
        api: &A,
        ids: &[String],
    ) -> Result<Vec<VideoItem>> {
        let mut attempt = 1;
        loop {
            match api.list_videos(ids).await {
                Ok(items) => return Ok(items),
                Err(e) if e.is_transient() && attempt < self.max_attempts => {
                    sleep(self.backoff * (1u32 << (attempt - 1))).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Precedence: restriction flags first, then duration bounds. A private
    /// video that is also too short is reported private.
    fn classify_one(&self, video: &VideoRef, item: &VideoItem) -> Verdict {
        if let Some(status) = &item.status {
            if status.privacy_status.as_deref() == Some("private") {
                return Verdict::rejected(video.clone(), RejectReason::Private);
            }
            if let Some(upload) = status.upload_status.as_deref() {
                if upload != "processed" {
                    return Verdict::rejected(video.clone(), RejectReason::Unavailable);
                }
            }
        }

        let seconds = item
            .content_details
            .as_ref()
            .and_then(|d| d.duration.as_deref())
            .and_then(parse_iso8601_duration);
        let Some(seconds) = seconds else {
            return Verdict::rejected(video.clone(), RejectReason::Unavailable);
        };

        if let Some(reason) = self.bounds.check(seconds) {
            return Verdict::rejected(video.clone(), reason);
        }
        Verdict::accepted(video.clone())
    }
}
