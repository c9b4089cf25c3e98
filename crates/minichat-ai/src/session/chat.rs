//! Async session operations: initialize, reseed, and submit.

use tracing::{debug, info, warn};

use crate::{AiError, ApiKey, ChatHandle, Turn};

use super::manager::ConversationSession;
use super::types::{Seed, SystemInstruction};

impl ConversationSession {
    /// Open the remote chat, replaying the current history as its context.
    ///
    /// No-op when already ready. On failure nothing is retained and the
    /// session stays uninitialized, so the caller can retry with other
    /// credentials.
    pub async fn initialize(
        &mut self,
        instruction: &SystemInstruction,
        credentials: &ApiKey,
    ) -> Result<(), AiError> {
        if self.is_ready() {
            debug!("Session already initialized");
            return Ok(());
        }

        let seed = Seed {
            instruction: instruction.clone(),
            credentials: credentials.clone(),
        };
        let handle = self.open_handle(&seed, self.turns.len()).await?;

        info!(seed_turns = self.turns.len(), "Chat client initialized");
        self.handle = Some(handle);
        self.seed = Some(seed);
        Ok(())
    }

    /// Replace the remote chat with a fresh one seeded from the full
    /// history.
    pub async fn reseed(&mut self) -> Result<(), AiError> {
        let seed = self.seed.clone().ok_or(AiError::NotReady)?;
        self.handle = None;
        let handle = self.open_handle(&seed, self.turns.len()).await?;

        info!(seed_turns = self.turns.len(), "Chat client reseeded");
        self.handle = Some(handle);
        Ok(())
    }

    /// Send one user message and return the assistant's reply.
    ///
    /// The user turn is recorded before the remote call. On failure no
    /// assistant turn is added, the user turn stays, and the session stays
    /// ready. A fault that leaves the remote chat in an unknown state drops
    /// it; the next call reseeds before sending.
    pub async fn submit(&mut self, text: impl Into<String>) -> Result<String, AiError> {
        let seed = self.seed.clone().ok_or(AiError::NotReady)?;
        let text = text.into();

        self.turns.push(Turn::user(text.clone()));

        let mut handle = match self.handle.take() {
            Some(handle) => handle,
            None => {
                // Seed with everything before the turn just recorded;
                // `send_message` adds that one itself.
                let prior = self.turns.len() - 1;
                debug!(seed_turns = prior, "Reseeding chat client before send");
                self.open_handle(&seed, prior).await.inspect_err(|e| {
                    warn!(kind = ?e.kind(), "Reseed failed: {e}");
                })?
            }
        };

        match handle.send_message(&text).await {
            Ok(reply) => {
                self.turns.push(Turn::assistant(reply.clone()));
                self.handle = Some(handle);
                Ok(reply)
            }
            Err(e) => {
                warn!(kind = ?e.kind(), "Message failed: {e}");
                if !e.invalidates_handle() {
                    self.handle = Some(handle);
                }
                Err(e)
            }
        }
    }

    async fn open_handle(
        &self,
        seed: &Seed,
        seed_len: usize,
    ) -> Result<Box<dyn ChatHandle>, AiError> {
        self.provider
            .start_chat(
                &seed.credentials,
                seed.instruction.text(),
                &self.turns[..seed_len],
            )
            .await
    }
}
