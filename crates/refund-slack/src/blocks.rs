//! The subset of Slack Block Kit used by refund notifications.

use serde::{Deserialize, Serialize};

/// A `chat.postMessage` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlackMessage {
    /// Destination channel ID.
    pub channel: String,

    /// Fallback text for notifications and clients that can't render blocks.
    pub text: String,

    pub blocks: Vec<Block>,
}

impl SlackMessage {
    /// True if any block carries `needle` in one of its text objects.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.blocks
            .iter()
            .flat_map(Block::texts)
            .any(|t| t.text().contains(needle))
    }
}

/// Layout block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Header {
        text: Text,
    },
    Section {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<Text>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        fields: Vec<Text>,
    },
    Divider,
    Context {
        elements: Vec<Text>,
    },
}

impl Block {
    pub fn header(text: &str) -> Self {
        Block::Header {
            text: Text::plain(text),
        }
    }

    pub fn section(text: Text) -> Self {
        Block::Section {
            text: Some(text),
            fields: Vec::new(),
        }
    }

    pub fn fields(fields: Vec<Text>) -> Self {
        Block::Section { text: None, fields }
    }

    /// Every text object in this block, in render order.
    pub fn texts(&self) -> Vec<&Text> {
        match self {
            Block::Header { text } => vec![text],
            Block::Section { text, fields } => text.iter().chain(fields.iter()).collect(),
            Block::Divider => Vec::new(),
            Block::Context { elements } => elements.iter().collect(),
        }
    }
}

/// Text composition object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Text {
    PlainText { text: String, emoji: bool },
    Mrkdwn { text: String },
}

impl Text {
    pub fn plain(text: &str) -> Self {
        Text::PlainText {
            text: text.to_string(),
            emoji: true,
        }
    }

    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Text::Mrkdwn { text: text.into() }
    }

    pub fn text(&self) -> &str {
        match self {
            Text::PlainText { text, .. } | Text::Mrkdwn { text } => text,
        }
    }
}
