//! Startup sequence: config, secrets, system prompt, then the chat loop.

use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use minichat_ai::{ChatProvider, ConversationSession};
use minichat_common::{ConfigError, Result};
use minichat_config::MiniChatConfig;
use tokio::io::AsyncBufRead;

use crate::cli::Args;
use crate::prompt;
use crate::render::{self, Status};
use crate::repl::Repl;
use crate::secrets::SecretStore;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The chat loop ran until EOF or `/quit`.
    Chatted,
    /// No API key; setup guidance was shown instead.
    NoApiKey,
    /// The system prompt file could not be read.
    MissingPrompt,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Chatted | Outcome::NoApiKey => ExitCode::SUCCESS,
            Outcome::MissingPrompt => ExitCode::FAILURE,
        }
    }
}

/// Load and validate the config file, then apply CLI overrides.
pub fn resolve_config(args: &Args) -> Result<MiniChatConfig> {
    let mut config = minichat_config::load_config(args.config.as_deref())?;
    if let Some(prompt) = &args.prompt {
        config.prompt.system_prompt_file = prompt.clone();
    }
    if let Some(model) = &args.model {
        config.model.name = model.clone();
    }
    Ok(config)
}

/// Run one session against `provider`, reading chat lines from `input`.
///
/// `input` is not touched unless both the system prompt and an API key
/// are available.
pub async fn run<R, W>(
    config: &MiniChatConfig,
    provider: Arc<dyn ChatProvider>,
    input: R,
    mut out: W,
) -> Result<Outcome>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    render::banner(&mut out, &config.display)?;

    let store = SecretStore::load(&config.secrets).unwrap_or_else(|e| {
        tracing::warn!("Ignoring secrets file: {e}");
        SecretStore::default()
    });
    let key_name = &config.secrets.api_key_name;
    let api_key = store.api_key(key_name);
    if api_key.is_none() {
        render::setup_guidance(&mut out, key_name, &SecretStore::suggested_file())?;
    }

    // No chat without the system prompt, key or not.
    let prompt_path = &config.prompt.system_prompt_file;
    let instruction = match prompt::load_system_instruction(prompt_path) {
        Ok(instruction) => instruction,
        Err(ConfigError::FileNotFound(path)) => {
            render::status(
                &mut out,
                Status::Error,
                &format!(
                    "Error: The system prompt file '{}' was not found.",
                    path.display()
                ),
            )?;
            return Ok(Outcome::MissingPrompt);
        }
        Err(e) => {
            render::status(
                &mut out,
                Status::Error,
                &format!("Error reading system prompt file: {e}"),
            )?;
            return Ok(Outcome::MissingPrompt);
        }
    };
    render::status(
        &mut out,
        Status::Success,
        &format!(
            "Loaded system prompt from {}",
            instruction.source().unwrap_or(prompt_path).display()
        ),
    )?;

    let Some(api_key) = api_key else {
        render::status(
            &mut out,
            Status::Info,
            "API key not configured. Please follow the instructions above.",
        )?;
        return Ok(Outcome::NoApiKey);
    };

    let mut session = ConversationSession::new(provider);
    let mut repl = Repl::new(&mut session, &instruction, api_key, &mut out)
        .with_input_hint(config.display.input_hint.clone());
    if repl.connect().await? {
        repl.after_connect()?;
    }
    repl.run(input).await?;
    drop(repl);

    out.flush()?;
    tracing::info!(turns = session.turn_count(), "Session closed");
    Ok(Outcome::Chatted)
}
