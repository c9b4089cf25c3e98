//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = MiniChatConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_temperature_out_of_range() {
    let mut config = MiniChatConfig::default();
    config.model.temperature = 2.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.temperature"));
}

#[test]
fn catches_nan_temperature() {
    let mut config = MiniChatConfig::default();
    config.model.temperature = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.temperature"));
}

#[test]
fn catches_zero_max_output_tokens() {
    let mut config = MiniChatConfig::default();
    config.model.max_output_tokens = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.max_output_tokens"));
}

#[test]
fn catches_blank_model_name() {
    let mut config = MiniChatConfig::default();
    config.model.name = "   ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.name"));
}

#[test]
fn catches_non_http_api_base() {
    let mut config = MiniChatConfig::default();
    config.model.api_base = "ftp://example.com".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.api_base"));
}

#[test]
fn catches_empty_prompt_path_and_key_name() {
    let mut config = MiniChatConfig::default();
    config.prompt.system_prompt_file = std::path::PathBuf::new();
    config.secrets.api_key_name = String::new();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("prompt.system_prompt_file"));
    assert!(err.contains("secrets.api_key_name"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = MiniChatConfig::default();
    config.model.temperature = -1.0;
    config.model.max_output_tokens = 100_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.temperature"));
    assert!(err.contains("model.max_output_tokens"));
}
