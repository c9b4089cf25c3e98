//! Full configuration validation.
//!
//! Validates numeric ranges and required names, collecting every problem
//! into a single `ConfigError`.

mod helpers;

#[cfg(test)]
mod tests;

use minichat_common::ConfigError;

use crate::schema::MiniChatConfig;
use helpers::{validate_non_empty, validate_range, validate_range_f64};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &MiniChatConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    // Model
    validate_non_empty(&mut errors, "model.name", &config.model.name);
    validate_range(
        &mut errors,
        "model.max_output_tokens",
        config.model.max_output_tokens,
        1,
        65536,
    );
    validate_range_f64(&mut errors, "model.temperature", config.model.temperature, 0.0, 2.0);
    if !config.model.api_base.starts_with("http://") && !config.model.api_base.starts_with("https://")
    {
        errors.push(format!(
            "model.api_base = {:?} must be an http(s) URL",
            config.model.api_base
        ));
    }

    // Prompt
    if config.prompt.system_prompt_file.as_os_str().is_empty() {
        errors.push("prompt.system_prompt_file must not be empty".into());
    }

    // Secrets
    validate_non_empty(&mut errors, "secrets.api_key_name", &config.secrets.api_key_name);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
