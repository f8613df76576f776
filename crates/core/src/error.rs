use thiserror::Error;

#[derive(Error, Debug)]
pub enum YtfillError {
    #[error("Authentication failed: {reason}")]
    Auth { reason: String },

    #[error("YouTube API returned {status} for {endpoint}: {message}")]
    Api {
        endpoint: &'static str,
        status: u16,
        message: String,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, YtfillError>;

impl YtfillError {
    /// Whether a retry with backoff could plausibly succeed.
    ///
    /// Quota errors surface as 403 with a quota/rate-limit message, which is
    /// the only 403 worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            YtfillError::Http(e) => e.is_timeout() || e.is_connect(),
            YtfillError::Api {
                status, message, ..
            } => match status {
                429 | 500 | 502 | 503 | 504 => true,
                403 => message.contains("quota") || message.contains("rateLimit"),
                _ => false,
            },
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_403_is_transient_but_forbidden_403_is_not() {
        let quota = YtfillError::Api {
            endpoint: "videos.list",
            status: 403,
            message: "The request cannot be completed because you have exceeded your quota.".into(),
        };
        let forbidden = YtfillError::Api {
            endpoint: "videos.list",
            status: 403,
            message: "Access forbidden.".into(),
        };
        assert!(quota.is_transient());
        assert!(!forbidden.is_transient());
    }

    #[test]
    fn server_errors_are_transient() {
        for status in [429, 500, 502, 503, 504] {
            let e = YtfillError::Api {
                endpoint: "videos.list",
                status,
                message: String::new(),
            };
            assert!(e.is_transient(), "{status} should be transient");
        }
        let bad_request = YtfillError::Api {
            endpoint: "videos.list",
            status: 400,
            message: String::new(),
        };
        assert!(!bad_request.is_transient());
    }
}
