//! System prompt configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// System prompt source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// File whose entire contents become the system instruction.
    /// Relative paths resolve against the working directory.
    pub system_prompt_file: PathBuf,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            system_prompt_file: PathBuf::from("mini_system_prompt3.txt"),
        }
    }
}
