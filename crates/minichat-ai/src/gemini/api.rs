//! `ChatProvider`/`ChatHandle` implementations for Gemini.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::{AiError, ApiKey, ChatHandle, ChatProvider, Turn};

use super::client::{build_request_body, generate_url, model_url, parse_response, GeminiProvider};
use super::config::GeminiConfig;
use super::errors::{classify_http_error, from_transport};

/// A Gemini chat seeded with prior turns.
pub struct GeminiChat {
    config: Arc<GeminiConfig>,
    http: reqwest::Client,
    api_key: ApiKey,
    system_instruction: String,
    context: Vec<Turn>,
}

impl std::fmt::Debug for GeminiChat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiChat")
            .field("model", &self.config.model)
            .field("api_key", &self.api_key)
            .field("context_len", &self.context.len())
            .finish()
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, AiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let text = response.text().await.unwrap_or_default();
    Err(classify_http_error(status.as_u16(), &text))
}

#[async_trait]
impl ChatProvider for GeminiProvider {
    async fn start_chat(
        &self,
        credentials: &ApiKey,
        system_instruction: &str,
        seed: &[Turn],
    ) -> Result<Box<dyn ChatHandle>, AiError> {
        if credentials.is_empty() {
            return Err(AiError::Auth("API key is empty".into()));
        }

        // Surface a rejected key or unknown model now rather than on the
        // first message.
        debug!(model = %self.config.model, "Gemini model lookup");
        let response = self
            .http
            .get(model_url(&self.config))
            .header("x-goog-api-key", credentials.expose())
            .send()
            .await
            .map_err(from_transport)?;
        check_status(response).await?;

        debug!(seed_turns = seed.len(), "Gemini chat started");
        Ok(Box::new(GeminiChat {
            config: Arc::clone(&self.config),
            http: self.http.clone(),
            api_key: credentials.clone(),
            system_instruction: system_instruction.to_string(),
            context: seed.to_vec(),
        }))
    }
}

#[async_trait]
impl ChatHandle for GeminiChat {
    async fn send_message(&mut self, text: &str) -> Result<String, AiError> {
        self.context.push(Turn::user(text));

        let body = build_request_body(&self.config, &self.system_instruction, &self.context);
        debug!(
            model = %self.config.model,
            context_turns = self.context.len(),
            "Gemini API request"
        );

        let response = self
            .http
            .post(generate_url(&self.config))
            .header("content-type", "application/json")
            .header("x-goog-api-key", self.api_key.expose())
            .json(&body)
            .send()
            .await
            .map_err(from_transport)?;
        let response = check_status(response).await?;

        let json: serde_json::Value = response.json().await.map_err(from_transport)?;
        let reply = parse_response(&json)?;

        self.context.push(Turn::assistant(reply.clone()));
        Ok(reply)
    }

    fn context(&self) -> &[Turn] {
        &self.context
    }
}
