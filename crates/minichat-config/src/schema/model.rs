//! Remote model configuration.

use serde::{Deserialize, Serialize};

/// Which model to talk to and how to sample from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Gemini model id, e.g. `gemini-2.0-flash`.
    pub name: String,
    /// Maximum output tokens per reply (valid range: 1-65536).
    pub max_output_tokens: u32,
    /// Sampling temperature (valid range: 0.0-2.0).
    pub temperature: f64,
    /// Generative Language API base URL, without the `/models` suffix.
    pub api_base: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: "gemini-2.0-flash".into(),
            max_output_tokens: 4096,
            temperature: 0.7,
            api_base: "https://generativelanguage.googleapis.com/v1beta".into(),
        }
    }
}
