//! Assistant chat endpoint.

use serde::{Deserialize, Serialize};

use crate::api::error::RequestError;
use crate::api::request::RequestClient;

const API_PATH: &str = "/application/ai";

/// A single chat turn sent to the assistant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiChatQuery {
    pub message: String,
}

impl AiChatQuery {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Clone)]
pub struct McpApi {
    client: RequestClient,
}

impl McpApi {
    pub fn new(client: RequestClient) -> Self {
        Self { client }
    }

    /// Send a message and wait for the complete reply.
    pub async fn chat(&self, query: &AiChatQuery) -> Result<String, RequestError> {
        self.chat_streaming(query, |_| {}).await
    }

    /// Send a message, forwarding reply text as the backend streams it.
    pub async fn chat_streaming<F>(
        &self,
        query: &AiChatQuery,
        on_chunk: F,
    ) -> Result<String, RequestError>
    where
        F: FnMut(&str),
    {
        tracing::debug!(len = query.message.len(), "Sending chat message");
        self.client
            .post_stream(&format!("{API_PATH}/chat"), query, on_chunk)
            .await
    }
}
