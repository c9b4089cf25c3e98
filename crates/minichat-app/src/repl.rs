//! Line-oriented chat loop over a `ConversationSession`.

use std::io::{self, Write};

use minichat_ai::{AiError, ApiKey, ConversationSession, FaultKind, SystemInstruction, Turn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::render::{self, Status};

/// What the loop should do after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Repl<'a, W: Write> {
    session: &'a mut ConversationSession,
    instruction: &'a SystemInstruction,
    credentials: ApiKey,
    input_hint: Option<String>,
    /// Why the last `connect` failed, if it did.
    last_fault: Option<FaultKind>,
    out: W,
}

impl<'a, W: Write> Repl<'a, W> {
    pub fn new(
        session: &'a mut ConversationSession,
        instruction: &'a SystemInstruction,
        credentials: ApiKey,
        out: W,
    ) -> Self {
        Self {
            session,
            instruction,
            credentials,
            input_hint: None,
            last_fault: None,
            out,
        }
    }

    /// Hint shown once the session is ready.
    pub fn with_input_hint(mut self, hint: impl Into<String>) -> Self {
        self.input_hint = Some(hint.into());
        self
    }

    /// Initialize the session and report the outcome.
    pub async fn connect(&mut self) -> io::Result<bool> {
        match self
            .session
            .initialize(self.instruction, &self.credentials)
            .await
        {
            Ok(()) => {
                self.last_fault = None;
                render::status(&mut self.out, Status::Success, "API Client Initialized.")?;
                Ok(true)
            }
            Err(e) => {
                self.last_fault = Some(e.kind());
                self.report_init_failure(&e)?;
                Ok(false)
            }
        }
    }

    fn report_init_failure(&mut self, err: &AiError) -> io::Result<()> {
        let (message, next_step) = match err.kind() {
            FaultKind::Auth => (
                err.display_message(),
                "Enter a corrected API key to retry, or /quit.",
            ),
            _ => (
                format!("Failed to initialize Google AI Client: {err}"),
                "Type /retry (or your message) to reconnect with the same key, or /quit.",
            ),
        };
        render::status(&mut self.out, Status::Error, &message)?;
        render::status(
            &mut self.out,
            Status::Warning,
            "Client initialization failed. Please check the error message above \
             and ensure your API key is correct in secrets.",
        )?;
        render::status(&mut self.out, Status::Info, next_step)
    }

    async fn reconnect(&mut self) -> io::Result<bool> {
        let connected = self.connect().await?;
        if connected {
            self.after_connect()?;
        }
        Ok(connected)
    }

    /// Handle one input line.
    pub async fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        let line = line.trim();
        match line {
            "" => {}
            "/quit" | "/exit" => return Ok(Flow::Quit),
            "/help" => render::commands_help(&mut self.out)?,
            "/history" => render::history(&mut self.out, self.session.history())?,
            "/reset" => {
                self.session.reset();
                render::status(&mut self.out, Status::Info, "Conversation cleared.")?;
                self.reconnect().await?;
            }
            "/retry" => {
                if self.session.is_ready() {
                    render::status(&mut self.out, Status::Info, "Already connected.")?;
                } else {
                    self.reconnect().await?;
                }
            }
            text if self.session.is_ready() => self.submit(text).await?,
            text if self.last_fault == Some(FaultKind::Auth) => {
                // Rejected key: the line is its replacement.
                self.credentials = ApiKey::new(text);
                self.reconnect().await?;
            }
            text => {
                if self.reconnect().await? {
                    self.submit(text).await?;
                }
            }
        }
        Ok(Flow::Continue)
    }

    pub fn after_connect(&mut self) -> io::Result<()> {
        render::commands_help(&mut self.out)?;
        if let Some(hint) = &self.input_hint {
            render::status(&mut self.out, Status::Info, hint)?;
        }
        if !self.session.history().is_empty() {
            render::history(&mut self.out, self.session.history())?;
        }
        Ok(())
    }

    async fn submit(&mut self, text: &str) -> io::Result<()> {
        debug!(chars = text.len(), "Submitting message");
        match self.session.submit(text).await {
            Ok(reply) => render::turn(&mut self.out, &Turn::assistant(reply)),
            Err(e) => render::status(&mut self.out, Status::Error, &e.display_message()),
        }
    }

    /// Read lines until EOF or `/quit`.
    pub async fn run<R: AsyncBufRead + Unpin>(&mut self, input: R) -> io::Result<()> {
        let mut lines = input.lines();
        loop {
            if self.session.is_ready() {
                render::input_prompt(&mut self.out)?;
            }
            let Some(line) = lines.next_line().await? else {
                break;
            };
            if self.handle_line(&line).await? == Flow::Quit {
                break;
            }
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}
