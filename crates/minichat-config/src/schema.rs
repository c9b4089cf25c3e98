//! Configuration schema types for minichat.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod display;
mod logging;
mod model;
mod prompt;
mod secrets;

pub use display::*;
pub use logging::*;
pub use model::*;
pub use prompt::*;
pub use secrets::*;

use serde::{Deserialize, Serialize};

/// Root configuration for minichat.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MiniChatConfig {
    pub model: ModelConfig,
    pub prompt: PromptConfig,
    pub secrets: SecretsConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_correct_model() {
        let config = MiniChatConfig::default();
        assert_eq!(config.model.name, "gemini-2.0-flash");
        assert_eq!(config.model.max_output_tokens, 4096);
        assert!((config.model.temperature - 0.7).abs() < f64::EPSILON);
        assert_eq!(
            config.model.api_base,
            "https://generativelanguage.googleapis.com/v1beta"
        );
    }

    #[test]
    fn default_config_has_correct_prompt_and_secrets() {
        let config = MiniChatConfig::default();
        assert_eq!(
            config.prompt.system_prompt_file.to_string_lossy(),
            "mini_system_prompt3.txt"
        );
        assert_eq!(config.secrets.api_key_name, "GOOGLE_API_KEY");
        assert!(config.secrets.file.is_none());
    }

    #[test]
    fn default_display_matches_page_header() {
        let config = MiniChatConfig::default();
        assert_eq!(config.display.title, "Mini Conlang Chatbot");
        assert!(config.display.caption.contains("Mini language"));
        assert_eq!(config.display.input_hint, "Ask something in or about Mini...");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: MiniChatConfig = toml::from_str(
            r#"
[model]
name = "gemini-pro"
"#,
        )
        .unwrap();
        assert_eq!(config.model.name, "gemini-pro");
        assert_eq!(config.model.max_output_tokens, 4096);
        assert_eq!(config.secrets.api_key_name, "GOOGLE_API_KEY");
        assert_eq!(config.logging.level, LogLevel::Warn);
    }

    #[test]
    fn log_level_parses_lowercase() {
        let config: MiniChatConfig = toml::from_str("[logging]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.level.as_directive(), "minichat=debug");
    }
}
