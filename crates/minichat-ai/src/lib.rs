//! Conversation engine for minichat.
//!
//! Provides:
//! - `Turn`/`Role`, the ordered unit of a conversation
//! - `ChatProvider`/`ChatHandle`, the seam to a remote stateful chat endpoint
//! - `GeminiProvider`, the Google Generative Language API implementation
//! - `ConversationSession`, which keeps the local turn history and the
//!   remote endpoint context in lock-step

pub mod credentials;
pub mod gemini;
pub mod session;

use async_trait::async_trait;

pub use credentials::ApiKey;
pub use gemini::{GeminiConfig, GeminiProvider};
pub use session::{ConversationSession, SessionState, SystemInstruction};

/// Opens stateful chats against a remote model.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Start a chat whose context is `seed`, replayed in order, under a
    /// fixed system instruction. Fails with `AiError::Auth` when the
    /// credentials are rejected.
    async fn start_chat(
        &self,
        credentials: &ApiKey,
        system_instruction: &str,
        seed: &[Turn],
    ) -> Result<Box<dyn ChatHandle>, AiError>;
}

/// A live chat whose context accumulates on every `send_message`.
#[async_trait]
pub trait ChatHandle: Send + Sync {
    /// Add `text` as a user turn and run one inference round-trip.
    ///
    /// The user turn stays in the context even when the call fails, so the
    /// context keeps matching a history that records unanswered turns.
    async fn send_message(&mut self, text: &str) -> Result<String, AiError>;

    /// The turns this chat currently holds as context.
    fn context(&self) -> &[Turn];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One utterance in a conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Turn {
    role: Role,
    text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Coarse class of a remote fault, used to pick the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    Auth,
    Quota,
    InvalidArgument,
    Unknown,
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("Authentication failed: {0}")]
    Auth(String),
    #[error("Quota exceeded: {0}")]
    Quota(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Session not initialized")]
    NotReady,
}

impl AiError {
    pub fn kind(&self) -> FaultKind {
        match self {
            AiError::Auth(_) => FaultKind::Auth,
            AiError::Quota(_) => FaultKind::Quota,
            AiError::InvalidArgument(_) => FaultKind::InvalidArgument,
            AiError::ApiError(_)
            | AiError::NetworkError(_)
            | AiError::ParseError(_)
            | AiError::NotReady => FaultKind::Unknown,
        }
    }

    /// Unknown-class faults leave the endpoint handle in an unverified
    /// state; the session discards it and reseeds before the next send.
    pub fn invalidates_handle(&self) -> bool {
        self.kind() == FaultKind::Unknown && !matches!(self, AiError::NotReady)
    }

    /// Human-readable text shown inline in place of a reply.
    pub fn display_message(&self) -> String {
        match self {
            AiError::Auth(_) => "Authentication failed. Please check your API key.".to_string(),
            AiError::Quota(_) => {
                "API Quota Exceeded. Please check your usage limits or try again later."
                    .to_string()
            }
            AiError::InvalidArgument(detail) => format!(
                "API Error (Invalid Argument): {detail}. \
                 This might be due to prompt length or content filters."
            ),
            AiError::NotReady => {
                "API client is not initialized. Check your API key configuration.".to_string()
            }
            other => format!("An error occurred while getting the response: {other}"),
        }
    }
}
