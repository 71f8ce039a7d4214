use std::sync::Mutex;

use async_trait::async_trait;

use crate::{blocks::SlackMessage, error::SlackError};

/// Where composed refund messages are delivered.
///
/// Implementations must be `Send + Sync` so they can sit in the gateway's
/// shared state and be called from any request task.
#[async_trait]
pub trait MessageSink: Send + Sync {
    /// Stable lowercase identifier used in logs (e.g. `"slack"`).
    fn name(&self) -> &str;

    /// Deliver one message. Any error is final; callers do not retry.
    async fn post(&self, msg: &SlackMessage) -> Result<(), SlackError>;
}

/// Keeps messages in memory instead of sending them.
#[derive(Default)]
pub struct MemorySink {
    sent: Mutex<Vec<SlackMessage>>,
    fail_with: Option<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that rejects every message with the given Slack error code.
    pub fn failing(error: &str) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_with: Some(error.to_string()),
        }
    }

    /// Snapshot of everything delivered so far.
    pub fn sent(&self) -> Vec<SlackMessage> {
        self.sent.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl MessageSink for MemorySink {
    fn name(&self) -> &str {
        "memory"
    }

    async fn post(&self, msg: &SlackMessage) -> Result<(), SlackError> {
        if let Some(ref error) = self.fail_with {
            return Err(SlackError::Api(error.clone()));
        }
        self.sent
            .lock()
            .map_err(|_| SlackError::Api("memory sink poisoned".to_string()))?
            .push(msg.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> SlackMessage {
        SlackMessage {
            channel: "C1".to_string(),
            text: "hi".to_string(),
            blocks: Vec::new(),
        }
    }

    #[tokio::test]
    async fn memory_sink_records_messages() {
        let sink = MemorySink::new();
        sink.post(&message()).await.unwrap();
        sink.post(&message()).await.unwrap();
        assert_eq!(sink.sent().len(), 2);
        assert_eq!(sink.sent()[0].channel, "C1");
    }

    #[tokio::test]
    async fn failing_sink_rejects() {
        let sink = MemorySink::failing("channel_not_found");
        let err = sink.post(&message()).await.unwrap_err();
        assert!(matches!(err, SlackError::Api(ref e) if e == "channel_not_found"));
        assert!(sink.sent().is_empty());
    }
}
