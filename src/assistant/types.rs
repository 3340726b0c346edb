use serde::{Deserialize, Serialize};

/// Who authored a chat turn. The serde names match the wire roles the
/// generation endpoint expects, so a `Role` serializes straight into the
/// request payload.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "model")]
    Model,
}

/// One role-tagged turn in the conversation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

/// The ordered conversation history for the current session.
///
/// Append-only: turns are pushed, never edited or removed. The whole
/// transcript is dropped when the process exits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::user(text));
    }

    pub fn push_model(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::model(text));
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}

/// Shown as a model turn whenever the assistant call fails, whatever the
/// underlying cause. The real error only goes to the log.
pub const FALLBACK_REPLY: &str = "I'm sorry, I'm having trouble connecting to \
    Lina's knowledge base right now. Please try again in a moment!";
