//! Minimal blocking client for a chat-completion endpoint.
//!
//! The contract with the endpoint is deliberately small: one system/user
//! prompt pair in, one completion out, ten seconds to answer. Any failure —
//! timeout, non-success status, unusable payload — is returned as an error
//! and the caller falls back to its local rules. Nothing is retried.

use crate::config::ModelEndpoint;
use crate::error::{PreambleError, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Connect and total-request timeout for every call.
pub const CHAT_TIMEOUT_SECS: u64 = 10;

const TEMPERATURE: f32 = 0.3;

pub struct ChatClient {
    http: Client,
    endpoint: ModelEndpoint,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatCompletion,
}

#[derive(Deserialize)]
struct ChatCompletion {
    content: String,
}

impl ChatClient {
    pub fn new(endpoint: ModelEndpoint) -> Result<Self> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(CHAT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(CHAT_TIMEOUT_SECS))
            .build()?;
        Ok(Self { http, endpoint })
    }

    pub fn model_name(&self) -> &str {
        &self.endpoint.name
    }

    /// Send one system/user prompt pair, return the trimmed completion.
    pub fn complete(&self, system: &str, user: &str, max_tokens: u32) -> Result<String> {
        let url = format!(
            "{}/chat/completions",
            self.endpoint.base_url.trim_end_matches('/')
        );
        let request = ChatRequest {
            model: &self.endpoint.name,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            max_tokens,
            temperature: TEMPERATURE,
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.endpoint.api_key)
            .json(&request)
            .send()?;

        if !response.status().is_success() {
            return Err(PreambleError::Chat(format!(
                "{} returned HTTP {}",
                url,
                response.status()
            )));
        }

        let payload: ChatResponse = response.json()?;
        let choice = payload
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| PreambleError::Chat("completion had no choices".to_string()))?;
        Ok(choice.message.content.trim().to_string())
    }
}
