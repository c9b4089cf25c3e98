//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    /// `tracing_subscriber` filter directive scoped to the minichat crates.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "minichat=trace",
            LogLevel::Debug => "minichat=debug",
            LogLevel::Info => "minichat=info",
            LogLevel::Warn => "minichat=warn",
            LogLevel::Error => "minichat=error",
        }
    }
}

/// Logging configuration.
///
/// Logs go to stderr; the default stays at `warn` so they do not
/// interleave with the conversation on stdout.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
