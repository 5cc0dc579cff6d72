//! HTTP client implementation for the mentor chat-completions API.
//!
//! This module provides a reqwest-based implementation of the [`MentorApi`](crate::MentorApi) trait.

use crate::prompt::mentor_prompt;
use crate::{ChatMessage, MentorApi, MentorError};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

/// Reply used when the API answers 2xx with a payload we cannot read.
const FALLBACK_REPLY: &str = "I couldn't process that. Please try again.";

/// Sampling temperature for mentor replies.
const TEMPERATURE: f64 = 0.7;
/// Replies are capped at 1-2 short sentences.
const MAX_TOKENS: u32 = 150;

/// Client for a chat-completions API using reqwest.
#[derive(Clone, Debug)]
pub struct ReqwestMentorClient {
    base_url: String,
    api_key: SecretString,
    model: String,
    client: reqwest::Client,
}

impl ReqwestMentorClient {
    /// Create a new client instance.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the completions API (e.g., "https://api.deepseek.com")
    /// * `api_key` - The bearer token for authentication
    /// * `model` - The model name sent with every request
    pub fn new(base_url: &str, api_key: SecretString, model: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .build()
            .expect("reqwest client build should not fail");
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model: model.into(),
            client,
        }
    }

    pub fn from_config(cfg: &crate::config::Config) -> Self {
        Self::new(&cfg.base_url, cfg.api_key.clone(), cfg.model.clone())
    }

    fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }

    /// Extract error information from a failed response.
    async fn error_from_response(&self, resp: reqwest::Response) -> MentorError {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        let body_snippet: String = body.chars().take(256).collect();

        match status {
            401 | 403 => MentorError::Auth(body_snippet),
            _ => MentorError::Api {
                status,
                body: body_snippet,
            },
        }
    }

    /// Pull the reply text out of a chat-completions payload.
    fn extract_reply(payload: &serde_json::Value) -> Option<String> {
        payload
            .get("choices")?
            .get(0)?
            .get("message")?
            .get("content")?
            .as_str()
            .map(str::to_string)
    }
}

#[async_trait]
impl MentorApi for ReqwestMentorClient {
    async fn generate_reply(&self, user_text: &str) -> Result<String, MentorError> {
        self.complete(vec![ChatMessage::user(mentor_prompt(user_text))])
            .await
    }

    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, MentorError> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": messages,
            "temperature": TEMPERATURE,
            "max_tokens": MAX_TOKENS,
        });

        tracing::debug!(model = %self.model, "requesting mentor completion");
        let resp = self
            .client
            .post(self.completions_url())
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(self.error_from_response(resp).await);
        }

        let payload: serde_json::Value = resp.json().await?;
        // An unreadable 2xx payload degrades to a canned reply, not an error.
        Ok(Self::extract_reply(&payload).unwrap_or_else(|| FALLBACK_REPLY.to_string()))
    }
}
