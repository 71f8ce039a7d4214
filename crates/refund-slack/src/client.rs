use std::time::Duration;

use async_trait::async_trait;
use refund_core::config::SlackConfig;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::{blocks::SlackMessage, error::SlackError, sink::MessageSink};

const POST_MESSAGE_PATH: &str = "/api/chat.postMessage";

/// Minimal Slack Web API client: bot-token auth and `chat.postMessage`.
pub struct SlackClient {
    client: reqwest::Client,
    token: String,
    base_url: String,
}

impl SlackClient {
    pub fn new(token: String, base_url: &str, timeout: Duration) -> Result<Self, SlackError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            token,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a client from config. Fails with [`SlackError::NoToken`] when no
    /// bot token is set.
    pub fn from_config(cfg: &SlackConfig) -> Result<Self, SlackError> {
        let token = cfg.token().ok_or(SlackError::NoToken)?;
        Self::new(
            token.to_string(),
            &cfg.api_base,
            Duration::from_secs(cfg.timeout_secs),
        )
    }
}

/// Envelope every Web API method answers with.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    ts: Option<String>,
}

#[async_trait]
impl MessageSink for SlackClient {
    fn name(&self) -> &str {
        "slack"
    }

    async fn post(&self, msg: &SlackMessage) -> Result<(), SlackError> {
        let url = format!("{}{}", self.base_url, POST_MESSAGE_PATH);

        debug!(channel = %msg.channel, blocks = msg.blocks.len(), "posting message to Slack");

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(msg)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), body = %body, "Slack HTTP error");
            return Err(SlackError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let api: ApiResponse = resp
            .json()
            .await
            .map_err(|e| SlackError::Parse(e.to_string()))?;

        if !api.ok {
            let error = api.error.unwrap_or_else(|| "unknown_error".to_string());
            warn!(channel = %msg.channel, error = %error, "Slack API rejected message");
            return Err(SlackError::Api(error));
        }

        info!(channel = %msg.channel, ts = api.ts.as_deref().unwrap_or("-"), "Slack message posted");
        Ok(())
    }
}
