//! Session struct and history bookkeeping.

use std::sync::Arc;

use tracing::debug;

use crate::{ChatHandle, ChatProvider, Turn};

use super::types::{Seed, SessionState};

/// One user's conversation: the turn history plus the remote chat handle.
///
/// Construct once per user session and pass it by `&mut` to every
/// operation.
pub struct ConversationSession {
    /// Conversation history, in conversation order. Append-only.
    pub(super) turns: Vec<Turn>,
    /// Opens remote chats.
    pub(super) provider: Arc<dyn ChatProvider>,
    /// Live remote chat. `None` before `initialize` and after a fault
    /// that invalidated it.
    pub(super) handle: Option<Box<dyn ChatHandle>>,
    /// Set by a successful `initialize`; its presence means `Ready`.
    pub(super) seed: Option<Seed>,
}

impl ConversationSession {
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self {
            turns: Vec::new(),
            provider,
            handle: None,
            seed: None,
        }
    }

    /// Restore a session from a saved history. The history is replayed
    /// into the remote chat on `initialize`.
    pub fn with_history(provider: Arc<dyn ChatProvider>, turns: Vec<Turn>) -> Self {
        Self {
            turns,
            ..Self::new(provider)
        }
    }

    pub fn state(&self) -> SessionState {
        if self.seed.is_some() {
            SessionState::Ready
        } else {
            SessionState::Uninitialized
        }
    }

    pub fn is_ready(&self) -> bool {
        self.state() == SessionState::Ready
    }

    /// Get the full conversation history.
    pub fn history(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of turns in history.
    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    /// Context held by the live remote chat, if any.
    pub fn endpoint_context(&self) -> Option<&[Turn]> {
        self.handle.as_deref().map(|h| h.context())
    }

    /// Drop every turn and the remote chat; the session must be
    /// initialized again.
    pub fn reset(&mut self) {
        debug!(turns = self.turns.len(), "Resetting conversation session");
        self.turns.clear();
        self.handle = None;
        self.seed = None;
    }
}
