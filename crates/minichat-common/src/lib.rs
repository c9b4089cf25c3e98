pub mod errors;

pub use errors::{ConfigError, MiniChatError};

pub type Result<T> = std::result::Result<T, MiniChatError>;
