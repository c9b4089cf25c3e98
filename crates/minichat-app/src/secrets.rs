//! Secret store: environment variables backed by an optional `secrets.toml`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use minichat_ai::ApiKey;
use minichat_common::{MiniChatError, Result};
use minichat_config::schema::SecretsConfig;
use tracing::{debug, warn};

/// Named secrets available to the process.
#[derive(Default)]
pub struct SecretStore {
    file_values: HashMap<String, String>,
    file: Option<PathBuf>,
}

impl std::fmt::Debug for SecretStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretStore")
            .field("file", &self.file)
            .field("keys", &self.file_values.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl SecretStore {
    /// Load the first `secrets.toml` found for `config`. No file at all is
    /// fine; the store then only sees the environment.
    pub fn load(config: &SecretsConfig) -> Result<Self> {
        let candidates = match &config.file {
            Some(path) => vec![path.clone()],
            None => default_candidates(),
        };

        for path in candidates {
            if path.exists() {
                return Self::from_file(&path);
            }
            debug!("no secrets file at {}", path.display());
        }

        if let Some(path) = &config.file {
            warn!("configured secrets file {} does not exist", path.display());
        }
        Ok(Self::default())
    }

    /// Parse a flat TOML table of string secrets. Non-string values are
    /// ignored.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            MiniChatError::Secrets(format!("failed to read {}: {e}", path.display()))
        })?;
        let table: toml::Table = toml::from_str(&content).map_err(|e| {
            MiniChatError::Secrets(format!("failed to parse {}: {e}", path.display()))
        })?;

        let file_values = table
            .into_iter()
            .filter_map(|(key, value)| match value {
                toml::Value::String(s) => Some((key, s)),
                _ => None,
            })
            .collect();

        debug!("loaded secrets from {}", path.display());
        Ok(Self {
            file_values,
            file: Some(path.to_path_buf()),
        })
    }

    /// Look up `name`: a non-empty environment variable wins over the file.
    pub fn get(&self, name: &str) -> Option<String> {
        std::env::var(name)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| {
                self.file_values
                    .get(name)
                    .filter(|v| !v.trim().is_empty())
                    .cloned()
            })
    }

    pub fn api_key(&self, name: &str) -> Option<ApiKey> {
        self.get(name).map(ApiKey::new)
    }

    /// Where a user should put the secret if they use a file.
    pub fn suggested_file() -> PathBuf {
        default_candidates()
            .pop()
            .unwrap_or_else(|| PathBuf::from(".minichat/secrets.toml"))
    }
}

fn default_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(".minichat").join("secrets.toml")];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("minichat").join("secrets.toml"));
    }
    candidates
}
