//! Secret store lookup configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the API key comes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SecretsConfig {
    /// Name of the secret holding the API key. Looked up as an
    /// environment variable first, then as a key in `secrets.toml`.
    pub api_key_name: String,
    /// Explicit `secrets.toml` path. When unset, `./.minichat/secrets.toml`
    /// and then `<config dir>/minichat/secrets.toml` are tried.
    pub file: Option<PathBuf>,
}

impl Default for SecretsConfig {
    fn default() -> Self {
        Self {
            api_key_name: "GOOGLE_API_KEY".into(),
            file: None,
        }
    }
}
