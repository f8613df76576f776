use std::path::{Path, PathBuf};

use yup_oauth2::{InstalledFlowAuthenticator, InstalledFlowReturnMethod};

use crate::error::{Result, YtfillError};

const SCOPES: &[&str] = &["https://www.googleapis.com/auth/youtube"];

/// Where refreshed OAuth tokens are cached between runs.
///
/// The file is written and read only by the OAuth library; nothing else in
/// this crate parses it.
pub fn token_cache_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("ytfill")
        .join("tokens.json")
}

/// Run the installed-app OAuth flow and return a Bearer access token.
///
/// The first run opens a browser consent page; later runs refresh the cached
/// token without user interaction.
pub async fn authorize(client_secret: &Path) -> Result<String> {
    let secret = yup_oauth2::read_application_secret(client_secret)
        .await
        .map_err(|e| YtfillError::Auth {
            reason: format!("cannot read {}: {}", client_secret.display(), e),
        })?;

    let cache = token_cache_path();
    if let Some(parent) = cache.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let auth = InstalledFlowAuthenticator::builder(secret, InstalledFlowReturnMethod::HTTPRedirect)
        .persist_tokens_to_disk(cache)
        .build()
        .await?;

    let token = auth.token(SCOPES).await.map_err(|e| YtfillError::Auth {
        reason: e.to_string(),
    })?;

    token
        .token()
        .map(str::to_string)
        .ok_or_else(|| YtfillError::Auth {
            reason: "token response contained no access token".to_string(),
        })
}
