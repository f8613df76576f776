use async_trait::async_trait;
use serde::Deserialize;

use crate::{error::Result, types::PlaylistSummary};

/// Maximum number of ids the videos endpoint accepts in one call.
pub const VIDEO_BATCH_SIZE: usize = 50;

/// The remote operations the pipeline needs.
///
/// Implemented by [`YouTubeClient`](crate::client::YouTubeClient) against the
/// live API, and by scripted fakes in tests so the validator and appender run
/// deterministically without the network.
#[async_trait]
pub trait YouTubeApi {
    /// Fetch status and duration for up to [`VIDEO_BATCH_SIZE`] ids.
    /// Unknown ids are simply absent from the result.
    async fn list_videos(&self, ids: &[String]) -> Result<Vec<VideoItem>>;

    /// The authenticated user's playlists with their item counts.
    async fn my_playlists(&self) -> Result<Vec<PlaylistSummary>>;

    /// Append one video to a playlist. The endpoint is not batchable.
    async fn insert_playlist_item(&self, playlist_id: &str, video_id: &str) -> Result<()>;
}

#[derive(Debug, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoItem {
    pub id: String,
    pub status: Option<VideoStatus>,
    #[serde(rename = "contentDetails")]
    pub content_details: Option<VideoContentDetails>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoStatus {
    #[serde(rename = "privacyStatus")]
    pub privacy_status: Option<String>,
    #[serde(rename = "uploadStatus")]
    pub upload_status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoContentDetails {
    pub duration: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistListResponse {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistItem {
    pub id: String,
    pub snippet: PlaylistSnippet,
    #[serde(rename = "contentDetails")]
    pub content_details: Option<PlaylistContentDetails>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistSnippet {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistContentDetails {
    #[serde(rename = "itemCount")]
    pub item_count: u64,
}
