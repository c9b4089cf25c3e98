//! Default TOML config content with documentation comments.

/// Generate the default TOML config content with comments.
pub fn default_config_toml() -> String {
    r##"# minichat configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[model]
# name = "gemini-2.0-flash"
# max_output_tokens = 4096    # 1-65536
# temperature = 0.7           # 0.0-2.0
# api_base = "https://generativelanguage.googleapis.com/v1beta"

[prompt]
# Entire file contents become the system instruction.
# system_prompt_file = "mini_system_prompt3.txt"

[secrets]
# Looked up in the environment first, then in secrets.toml.
# api_key_name = "GOOGLE_API_KEY"
# file = "/path/to/secrets.toml"

[display]
# title = "Mini Conlang Chatbot"
# caption = "Chat with an AI instructed on the Mini language. Uses Gemini."
# input_hint = "Ask something in or about Mini..."

[logging]
# level = "warn"              # trace, debug, info, warn, error
"##
    .to_string()
}
