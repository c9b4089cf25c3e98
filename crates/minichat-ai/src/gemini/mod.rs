//! Google Gemini API provider.
//!
//! Implements `ChatProvider` for Gemini models via the Generative
//! Language API. The API is stateless; a `GeminiChat` holds the
//! accumulated context and replays it on every request.

mod api;
mod client;
mod config;
mod errors;

#[cfg(test)]
mod http_tests;

pub use api::GeminiChat;
pub use client::GeminiProvider;
pub use config::GeminiConfig;
