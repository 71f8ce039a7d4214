use thiserror::Error;

/// Errors that can occur while delivering a message to Slack.
#[derive(Debug, Error)]
pub enum SlackError {
    /// The request never got a response (DNS, TLS, timeout, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Slack answered with a non-success HTTP status.
    #[error("Slack API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Slack answered 200 but with `"ok": false`.
    #[error("Slack API error: {0}")]
    Api(String),

    /// The response body wasn't the JSON envelope we expect.
    #[error("Parse error: {0}")]
    Parse(String),

    /// No bot token was configured.
    #[error("no bot token configured")]
    NoToken,
}
