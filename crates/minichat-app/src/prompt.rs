//! System prompt loading.

use std::path::Path;

use minichat_ai::SystemInstruction;
use minichat_common::ConfigError;

/// Read the whole file as the system instruction.
pub fn load_system_instruction(path: &Path) -> Result<SystemInstruction, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(SystemInstruction::new(text).with_source(path)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(ConfigError::FileNotFound(path.to_path_buf()))
        }
        Err(e) => Err(ConfigError::PromptUnreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }),
    }
}
