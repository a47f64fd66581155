//! ntfy channel — push notifications to the operator's phone.
//!
//! One raw POST to `{base}/{topic}`: title, priority, and tags travel as
//! headers, the message text is the body. A missing topic downgrades to a
//! warning; transport failures propagate to the caller.

use postclaw_core::config::NtfyConfig;
use postclaw_core::error::{PostClawError, Result};
use std::time::Duration;

const SEND_TIMEOUT: Duration = Duration::from_secs(20);

/// Fire-and-forget notifier. No retries, no delivery tracking.
pub struct NtfyNotifier {
    config: NtfyConfig,
    client: reqwest::Client,
}

impl NtfyNotifier {
    pub fn new(config: NtfyConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Send one notification.
    pub async fn send(&self, title: &str, message: &str, tags: &[&str], priority: u8) -> Result<()> {
        if self.config.topic.is_empty() {
            tracing::warn!("ntfy topic not set; skipping notification");
            return Ok(());
        }

        let url = format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.topic
        );
        let mut req = self
            .client
            .post(&url)
            .header("Title", title)
            .header("Priority", priority.to_string())
            .timeout(SEND_TIMEOUT);
        if !tags.is_empty() {
            req = req.header("Tags", tags.join(","));
        }

        let resp = req
            .body(message.to_string())
            .send()
            .await
            .map_err(|e| PostClawError::Channel(format!("ntfy send failed: {e}")))?;
        tracing::info!("ntfy responded {}", resp.status());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_topic_is_a_soft_no_op() {
        // No server at all — a request attempt would fail loudly.
        let notifier = NtfyNotifier::new(NtfyConfig {
            base_url: "http://127.0.0.1:1".into(),
            topic: String::new(),
        });
        notifier
            .send("title", "message", &["memo"], 4)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn sends_body_and_metadata_headers() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/alerts")
            .match_header("title", "Heads up")
            .match_header("priority", "4")
            .match_header("tags", "spiral_calendar,memo")
            .match_body("the message")
            .with_status(200)
            .expect(1)
            .create_async()
            .await;

        let notifier = NtfyNotifier::new(NtfyConfig {
            base_url: server.url(),
            topic: "alerts".into(),
        });
        notifier
            .send("Heads up", "the message", &["spiral_calendar", "memo"], 4)
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn trailing_slash_on_base_url_is_tolerated() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/alerts")
            .with_status(200)
            .expect(1)
            .create_async()
            .await;

        let notifier = NtfyNotifier::new(NtfyConfig {
            base_url: format!("{}/", server.url()),
            topic: "alerts".into(),
        });
        notifier.send("t", "m", &[], 3).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_is_still_ok() {
        // Delivery is best-effort; only transport failures bubble up.
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/alerts")
            .with_status(500)
            .create_async()
            .await;

        let notifier = NtfyNotifier::new(NtfyConfig {
            base_url: server.url(),
            topic: "alerts".into(),
        });
        notifier.send("t", "m", &[], 3).await.unwrap();
    }

    #[tokio::test]
    async fn unreachable_relay_is_a_channel_error() {
        let notifier = NtfyNotifier::new(NtfyConfig {
            base_url: "http://127.0.0.1:1".into(),
            topic: "alerts".into(),
        });
        assert!(matches!(
            notifier.send("t", "m", &[], 3).await,
            Err(PostClawError::Channel(_))
        ));
    }
}
