//! Session state and seed types.

use std::path::{Path, PathBuf};

use crate::ApiKey;

/// Lifecycle state of a `ConversationSession`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    Ready,
}

/// The fixed system instruction, constant for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemInstruction {
    text: String,
    source: Option<PathBuf>,
}

impl SystemInstruction {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: None,
        }
    }

    /// Record the file the instruction was read from.
    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(path.into());
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// What a successful `initialize` keeps so the handle can be reseeded.
#[derive(Debug, Clone)]
pub(super) struct Seed {
    pub(super) instruction: SystemInstruction,
    pub(super) credentials: ApiKey,
}
