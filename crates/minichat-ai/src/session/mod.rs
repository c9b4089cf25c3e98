//! Conversation session management.
//!
//! A `ConversationSession` owns the ordered turn history and the remote
//! chat handle, and keeps the handle's context equal to that history.

mod chat;
mod manager;
mod types;


pub use manager::ConversationSession;
pub use types::{SessionState, SystemInstruction};
