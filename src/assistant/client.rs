use std::fmt;

use async_trait::async_trait;

use super::types::ChatMessage;

/// Errors that can occur while asking the assistant for a reply.
/// These never reach the visitor directly: the widget boundary collapses
/// every variant into the one fallback string and logs the detail.
#[derive(Debug)]
pub enum ClientError {
    /// Network-level failure (DNS, connection refused, broken transfer).
    Network(String),
    /// The endpoint answered with a non-success status.
    Api { status: u16, message: String },
    /// The endpoint answered 200 but the body wasn't usable.
    Parse(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Network(msg) => write!(f, "network error: {msg}"),
            ClientError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ClientError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ClientError {}

/// Everything a client needs to produce one reply: the prior transcript,
/// the new visitor message, and the model to ask.
pub struct ReplyRequest<'a> {
    pub history: &'a [ChatMessage],
    pub message: &'a str,
    pub model: &'a str,
}

/// A backend that turns a conversation into a single reply string.
///
/// One invocation, one outbound call: no retries, no streaming, no
/// cancellation. Implemented by [`super::GeminiClient`] in production and by
/// the static doubles in `test_support` under test.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Returns the name of the client, for logging.
    fn name(&self) -> &str;

    /// Produce the reply to `request.message` given the prior history.
    async fn reply(&self, request: ReplyRequest<'_>) -> Result<String, ClientError>;
}
