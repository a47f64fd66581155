//! LinkedIn channel — refresh-token exchange + post publishing via the
//! versioned REST posts API.
//!
//! Two linear steps per publish, no retries: exchange the long-lived
//! refresh token for an access token, then POST the post payload. Errors
//! keep the upstream status and body verbatim.

use postclaw_core::config::LinkedInConfig;
use postclaw_core::error::{PostClawError, Result};
use postclaw_core::types::PublishResult;
use serde::Deserialize;
use std::time::Duration;

const TOKEN_TIMEOUT: Duration = Duration::from_secs(30);
const PUBLISH_TIMEOUT: Duration = Duration::from_secs(60);

/// Restli protocol header required by the posts API.
const RESTLI_PROTOCOL_VERSION: &str = "2.0.0";
/// Header carrying the created share URN.
const RESTLI_ID_HEADER: &str = "x-restli-id";
const FEED_UPDATE_BASE: &str = "https://www.linkedin.com/feed/update/";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

/// LinkedIn publisher. One instance per run; holds no state between calls.
pub struct LinkedInChannel {
    config: LinkedInConfig,
    client: reqwest::Client,
}

impl LinkedInChannel {
    pub fn new(config: LinkedInConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Exchange the long-lived refresh token for a short-lived access token.
    pub async fn refresh_access_token(&self) -> Result<String> {
        if self.config.client_id.is_empty()
            || self.config.client_secret.is_empty()
            || self.config.refresh_token.is_empty()
        {
            return Err(PostClawError::Config(
                "missing LinkedIn OAuth secrets (client id/secret or refresh token)".into(),
            ));
        }

        let form = [
            ("grant_type", "refresh_token"),
            ("refresh_token", self.config.refresh_token.as_str()),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
        ];
        let resp = self
            .client
            .post(&self.config.oauth_url)
            .form(&form)
            .timeout(TOKEN_TIMEOUT)
            .send()
            .await
            .map_err(|e| PostClawError::Channel(format!("token refresh failed: {e}")))?;

        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        if status != reqwest::StatusCode::OK {
            return Err(PostClawError::Auth {
                status: status.as_u16(),
                body,
            });
        }

        let token: TokenResponse = serde_json::from_str(&body).map_err(|_| PostClawError::Auth {
            status: status.as_u16(),
            body: body.clone(),
        })?;
        token
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or(PostClawError::Auth {
                status: status.as_u16(),
                body,
            })
    }

    /// Publish `text` as a new public post. Returns the share URN (possibly
    /// empty) and a feed URL when the URN was present.
    pub async fn publish(&self, text: &str) -> Result<PublishResult> {
        if self.config.author_urn.is_empty() {
            return Err(PostClawError::Config(
                "LinkedIn author URN is not set (e.g., urn:li:person:XXXX)".into(),
            ));
        }

        let access_token = self.refresh_access_token().await?;
        let payload = serde_json::json!({
            "author": self.config.author_urn,
            "commentary": text,
            "visibility": "PUBLIC",
            "distribution": {
                "feedDistribution": "MAIN_FEED",
                "targetEntities": [],
                "thirdPartyDistributionChannels": []
            },
            "lifecycleState": "PUBLISHED",
            "isReshareDisabledByAuthor": false
        });

        let resp = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&access_token)
            .header("X-Restli-Protocol-Version", RESTLI_PROTOCOL_VERSION)
            .header("LinkedIn-Version", &self.config.api_version)
            .json(&payload)
            .timeout(PUBLISH_TIMEOUT)
            .send()
            .await
            .map_err(|e| PostClawError::Channel(format!("publish request failed: {e}")))?;

        let status = resp.status();
        if status != reqwest::StatusCode::CREATED && status != reqwest::StatusCode::ACCEPTED {
            let body = resp.text().await.unwrap_or_default();
            return Err(PostClawError::Publish {
                status: status.as_u16(),
                body,
            });
        }

        let post_urn = resp
            .headers()
            .get(RESTLI_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .trim()
            .to_string();
        let view_url = if post_urn.is_empty() {
            None
        } else {
            Some(format!(
                "{FEED_UPDATE_BASE}{}",
                urlencoding::encode(&post_urn)
            ))
        };
        tracing::info!("Post published ({status}), urn: '{post_urn}'");
        Ok(PublishResult { post_urn, view_url })
    }
}
