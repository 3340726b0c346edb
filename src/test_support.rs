//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::assistant::{ChatClient, ClientError, ReplyRequest};
use crate::core::state::App;

/// A client that always answers with the same canned text.
pub struct StaticClient {
    pub reply: String,
}

impl Default for StaticClient {
    fn default() -> Self {
        Self {
            reply: "canned reply".to_string(),
        }
    }
}

#[async_trait]
impl ChatClient for StaticClient {
    fn name(&self) -> &str {
        "static"
    }

    async fn reply(&self, _request: ReplyRequest<'_>) -> Result<String, ClientError> {
        Ok(self.reply.clone())
    }
}

/// A client whose every call fails, for exercising the fallback path.
pub struct FailingClient;

#[async_trait]
impl ChatClient for FailingClient {
    fn name(&self) -> &str {
        "failing"
    }

    async fn reply(&self, _request: ReplyRequest<'_>) -> Result<String, ClientError> {
        Err(ClientError::Network("simulated outage".to_string()))
    }
}

/// Creates a test App backed by a StaticClient.
pub fn test_app() -> App {
    App::new(Arc::new(StaticClient::default()), "test-model".to_string())
}
