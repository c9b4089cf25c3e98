//! Display surface text.

use serde::{Deserialize, Serialize};

/// Banner and prompt text shown by the terminal front-end.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub title: String,
    pub caption: String,
    /// Hint printed before the first input line.
    pub input_hint: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "Mini Conlang Chatbot".into(),
            caption: "Chat with an AI instructed on the Mini language. Uses Gemini.".into(),
            input_hint: "Ask something in or about Mini...".into(),
        }
    }
}
