use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::{HeraldError, Result};
use crate::pipeline::Delivery;

/// Delivery collaborator that executes a Discord webhook.
///
/// See <https://discord.com/developers/docs/resources/webhook#execute-webhook>.
pub struct DiscordWebhook {
    http: reqwest::Client,
    url: String,
    username: Option<String>,
    avatar_url: Option<String>,
}

#[derive(Debug, Serialize)]
struct ExecutePayload<'a> {
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    avatar_url: Option<&'a str>,
}

impl DiscordWebhook {
    /// Create a webhook executor with default HTTP settings.
    pub fn new(
        url: impl Into<String>,
        username: Option<String>,
        avatar_url: Option<String>,
    ) -> Self {
        Self::with_client(reqwest::Client::new(), url, username, avatar_url)
    }

    /// Create a webhook executor using the provided [`reqwest::Client`].
    pub fn with_client(
        client: reqwest::Client,
        url: impl Into<String>,
        username: Option<String>,
        avatar_url: Option<String>,
    ) -> Self {
        Self {
            http: client,
            url: url.into(),
            username,
            avatar_url,
        }
    }

    /// Send `content` to the webhook. Discord caps the message body at 2000
    /// characters; longer bodies come back as an unexpected-status error.
    #[instrument(skip(self, content))]
    pub async fn send(&self, content: &str) -> Result<()> {
        debug!(length = content.len(), "executing webhook");

        let payload = ExecutePayload {
            content,
            username: self.username.as_deref(),
            avatar_url: self.avatar_url.as_deref(),
        };

        let response = self
            .http
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| HeraldError::Http {
                url: self.url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(HeraldError::UnexpectedStatus {
                url: self.url.clone(),
                status,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl Delivery for DiscordWebhook {
    async fn deliver(&self, content: &str) -> Result<()> {
        self.send(content).await
    }
}
