pub mod api;
pub mod append;
pub mod auth;
pub mod client;
pub mod duration;
pub mod error;
pub mod links;
pub mod types;
pub mod validate;

pub use api::{VIDEO_BATCH_SIZE, YouTubeApi};
pub use append::{AppendReport, InsertOutcome, PLAYLIST_CAPACITY, append_all};
pub use auth::authorize;
pub use client::YouTubeClient;
pub use duration::parse_iso8601_duration;
pub use error::{Result, YtfillError};
pub use links::extract_video_id;
pub use types::{DurationBounds, PlaylistSummary, RejectReason, Verdict, VerdictOutcome, VideoRef};
pub use validate::Validator;
