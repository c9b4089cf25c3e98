//! Gemini provider struct, request building, and response parsing.

use std::sync::Arc;

use crate::{AiError, Role, Turn};

use super::config::GeminiConfig;

/// Finish reasons that mean the reply was withheld by a content filter.
const FILTER_FINISH_REASONS: &[&str] = &[
    "SAFETY",
    "BLOCKLIST",
    "PROHIBITED_CONTENT",
    "SPII",
    "RECITATION",
];

/// Gemini chat provider.
pub struct GeminiProvider {
    pub(crate) config: Arc<GeminiConfig>,
    pub(crate) http: reqwest::Client,
}

impl GeminiProvider {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config: Arc::new(config),
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(10))
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("failed to build HTTP client"),
        }
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }
}

/// `{api_base}/models/{model}`, the model metadata resource.
pub(crate) fn model_url(config: &GeminiConfig) -> String {
    format!("{}/models/{}", config.api_base, config.model)
}

pub(crate) fn generate_url(config: &GeminiConfig) -> String {
    format!("{}:generateContent", model_url(config))
}

fn wire_role(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Assistant => "model",
    }
}

/// Build the JSON request body for `generateContent`.
///
/// Adjacent turns with the same role (an unanswered user turn followed by
/// the next one) become one content entry with several parts.
pub(crate) fn build_request_body(
    config: &GeminiConfig,
    system_instruction: &str,
    context: &[Turn],
) -> serde_json::Value {
    let mut contents: Vec<serde_json::Value> = Vec::new();

    for turn in context {
        let role = wire_role(turn.role());
        let part = serde_json::json!({ "text": turn.text() });

        match contents.last_mut() {
            Some(last) if last["role"] == role => {
                if let Some(parts) = last["parts"].as_array_mut() {
                    parts.push(part);
                }
            }
            _ => contents.push(serde_json::json!({
                "role": role,
                "parts": [part]
            })),
        }
    }

    let mut body = serde_json::json!({
        "contents": contents,
        "generationConfig": {
            "maxOutputTokens": config.max_tokens,
            "temperature": config.temperature,
        }
    });

    if !system_instruction.is_empty() {
        body["systemInstruction"] = serde_json::json!({
            "parts": [{ "text": system_instruction }]
        });
    }

    body
}

/// Parse a `generateContent` response into the reply text.
pub(crate) fn parse_response(json: &serde_json::Value) -> Result<String, AiError> {
    if let Some(reason) = json["promptFeedback"]["blockReason"].as_str() {
        return Err(AiError::InvalidArgument(format!("prompt blocked ({reason})")));
    }

    let first = json["candidates"]
        .as_array()
        .and_then(|c| c.first())
        .ok_or_else(|| AiError::ParseError("no candidates in response".to_string()))?;

    let text: String = first["content"]["parts"]
        .as_array()
        .map(|parts| {
            parts
                .iter()
                .filter_map(|part| part["text"].as_str())
                .collect()
        })
        .unwrap_or_default();

    if text.is_empty() {
        let finish = first["finishReason"].as_str().unwrap_or("UNSPECIFIED");
        if FILTER_FINISH_REASONS.contains(&finish) {
            return Err(AiError::InvalidArgument(format!(
                "response blocked ({finish})"
            )));
        }
        return Err(AiError::ParseError(format!(
            "candidate has no text (finishReason: {finish})"
        )));
    }

    Ok(text)
}
