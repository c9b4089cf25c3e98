use std::path::PathBuf;

use clap::Parser;

/// minichat — chat with a Gemini model instructed by a system prompt file.
#[derive(Parser, Debug)]
#[command(name = "minichat", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// System prompt file override.
    #[arg(short = 'p', long)]
    pub prompt: Option<PathBuf>,

    /// Model override (e.g. gemini-2.0-flash).
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let args = Args::try_parse_from([
            "minichat",
            "--prompt",
            "prompts/mini.txt",
            "-m",
            "gemini-pro",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.prompt, Some(PathBuf::from("prompts/mini.txt")));
        assert_eq!(args.model.as_deref(), Some("gemini-pro"));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.config.is_none());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
