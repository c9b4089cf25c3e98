//! Gemini API client configuration.

pub(crate) const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini API client configuration.
///
/// The API key is not part of the config; it is passed per chat so a
/// rejected key can be replaced without rebuilding the provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub api_base: String,
}

impl GeminiConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            max_tokens: 4096,
            temperature: 0.7,
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self::new("gemini-2.0-flash")
    }
}
