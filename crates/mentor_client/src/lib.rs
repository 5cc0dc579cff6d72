//! Minimal `MentorApi` trait and basic reqwest-based chat client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod config;
pub mod http_client;
pub mod prompt;

#[derive(Debug, Error)]
pub enum MentorError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("authentication error: {0}")]
    Auth(String),
    #[error("api error (status {status}): {body}")]
    Api { status: u16, body: String },
    #[error("configuration error: {0}")]
    Config(String),
}

/// One message in a chat-completions exchange.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }
}

#[async_trait]
pub trait MentorApi: Send + Sync + 'static {
    /// Wrap `user_text` in the mentor prompt frame and return the reply text.
    async fn generate_reply(&self, user_text: &str) -> Result<String, MentorError>;

    /// Low-level completion call with explicit messages.
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, MentorError>;
}

#[cfg(test)]
mod tests {
    use crate::http_client::ReqwestMentorClient;

    #[tokio::test]
    async fn client_new_and_basic() {
        let client = ReqwestMentorClient::new(
            "http://localhost",
            secrecy::SecretString::new("key".into()),
            "deepseek-chat",
        );
        let _ = client;
    }

    #[test]
    fn chat_message_user_sets_role() {
        let msg = super::ChatMessage::user("hello");
        assert_eq!(msg.role, "user");
        assert_eq!(msg.content, "hello");
    }
}
