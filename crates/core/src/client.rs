use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use crate::{
    api::{PlaylistListResponse, VideoItem, VideoListResponse, YouTubeApi},
    error::{Result, YtfillError},
    types::PlaylistSummary,
};

const API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// YouTube Data API v3 client authenticated with a Bearer access token.
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    http: Client,
    access_token: String,
    base_url: String,
}

impl YouTubeClient {
    pub fn new(access_token: String) -> Self {
        Self::with_base_url(access_token, API_BASE)
    }

    /// Point the client at a different API root. Tests use this.
    pub fn with_base_url(access_token: String, base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            access_token,
            base_url: base_url.into(),
        }
    }

    async fn check(
        endpoint: &'static str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(YtfillError::Api {
            endpoint,
            status: status.as_u16(),
            message: api_error_message(&body),
        })
    }
}

/// Pull the human-readable message out of a Google error body, falling back
/// to the raw text.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

#[async_trait]
impl YouTubeApi for YouTubeClient {
    async fn list_videos(&self, ids: &[String]) -> Result<Vec<VideoItem>> {
        let joined = ids.join(",");
        let response = self
            .http
            .get(format!("{}/videos", self.base_url))
            .query(&[
                ("part", "contentDetails,status"),
                ("id", joined.as_str()),
            ])
            .bearer_auth(&self.access_token)
            .send()
            .await?;
        let response = Self::check("videos.list", response).await?;
        let parsed: VideoListResponse = response.json().await?;
        Ok(parsed.items)
    }

    async fn my_playlists(&self) -> Result<Vec<PlaylistSummary>> {
        let mut playlists = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self
                .http
                .get(format!("{}/playlists", self.base_url))
                .query(&[
                    ("part", "snippet,contentDetails"),
                    ("mine", "true"),
                    ("maxResults", "50"),
                ])
                .bearer_auth(&self.access_token);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token.as_str())]);
            }

            let response = Self::check("playlists.list", request.send().await?).await?;
            let page: PlaylistListResponse = response.json().await?;

            playlists.extend(page.items.into_iter().map(|item| PlaylistSummary {
                id: item.id,
                title: item.snippet.title,
                item_count: item.content_details.map(|d| d.item_count).unwrap_or(0),
            }));

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        Ok(playlists)
    }

    async fn insert_playlist_item(&self, playlist_id: &str, video_id: &str) -> Result<()> {
        let body = json!({
            "snippet": {
                "playlistId": playlist_id,
                "resourceId": {
                    "kind": "youtube#video",
                    "videoId": video_id,
                }
            }
        });

        let response = self
            .http
            .post(format!("{}/playlistItems", self.base_url))
            .query(&[("part", "snippet")])
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await?;
        Self::check("playlistItems.insert", response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client_for(server: &MockServer) -> YouTubeClient {
        YouTubeClient::with_base_url("test-token".to_string(), server.uri())
    }

    #[tokio::test]
    async fn list_videos_parses_items_and_tolerates_omitted_ids() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/videos"))
            .and(query_param("part", "contentDetails,status"))
            .and(query_param("id", "aaaaaaaaaaa,bbbbbbbbbbb"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    {
                        "id": "aaaaaaaaaaa",
                        "status": { "privacyStatus": "public", "uploadStatus": "processed" },
                        "contentDetails": { "duration": "PT4M13S" }
                    }
                ]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let items = client
            .list_videos(&["aaaaaaaaaaa".to_string(), "bbbbbbbbbbb".to_string()])
            .await
            .unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "aaaaaaaaaaa");
        assert_eq!(
            items[0]
                .content_details
                .as_ref()
                .unwrap()
                .duration
                .as_deref(),
            Some("PT4M13S")
        );
    }

    #[tokio::test]
    async fn my_playlists_follows_pagination() {
        let server = MockServer::start().await;
        // More specific mock first: wiremock picks the first match.
        Mock::given(method("GET"))
            .and(path("/playlists"))
            .and(query_param("pageToken", "page2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    {
                        "id": "PL2",
                        "snippet": { "title": "Second" },
                        "contentDetails": { "itemCount": 7 }
                    }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/playlists"))
            .and(query_param("mine", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    {
                        "id": "PL1",
                        "snippet": { "title": "First" },
                        "contentDetails": { "itemCount": 4998 }
                    }
                ],
                "nextPageToken": "page2"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let playlists = client.my_playlists().await.unwrap();

        assert_eq!(playlists.len(), 2);
        assert_eq!(playlists[0].id, "PL1");
        assert_eq!(playlists[0].item_count, 4998);
        assert_eq!(playlists[1].title, "Second");
        assert_eq!(playlists[1].item_count, 7);
    }

    #[tokio::test]
    async fn insert_sends_resource_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/playlistItems"))
            .and(query_param("part", "snippet"))
            .and(body_partial_json(json!({
                "snippet": {
                    "playlistId": "PL1",
                    "resourceId": { "kind": "youtube#video", "videoId": "aaaaaaaaaaa" }
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "item1" })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.insert_playlist_item("PL1", "aaaaaaaaaaa").await.unwrap();
    }

    #[tokio::test]
    async fn api_errors_carry_status_and_google_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/playlistItems"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error": { "code": 404, "message": "Video not found." }
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .insert_playlist_item("PL1", "aaaaaaaaaaa")
            .await
            .unwrap_err();

        match err {
            YtfillError::Api {
                endpoint,
                status,
                message,
            } => {
                assert_eq!(endpoint, "playlistItems.insert");
                assert_eq!(status, 404);
                assert_eq!(message, "Video not found.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
