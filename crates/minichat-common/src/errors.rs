use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("system prompt unreadable: {}: {reason}", path.display())]
    PromptUnreadable { path: PathBuf, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum MiniChatError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("secret store error: {0}")]
    Secrets(String),
}
