mod app;
mod cli;
mod dotenv;
mod prompt;
mod render;
mod repl;
mod secrets;

use std::process::ExitCode;
use std::sync::Arc;

use minichat_ai::{GeminiConfig, GeminiProvider};
use minichat_config::schema::LogLevel;
use minichat_config::MiniChatConfig;
use tracing_subscriber::EnvFilter;

use render::Status;

fn init_logging(directive: &str) {
    let fallback = LogLevel::default().as_directive();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(
            directive.parse().unwrap_or_else(|_| {
                fallback.parse().expect("fallback directive is valid")
            }),
        ))
        .init();
}

fn gemini_config(config: &MiniChatConfig) -> GeminiConfig {
    GeminiConfig::new(config.model.name.clone())
        .with_max_tokens(config.model.max_output_tokens)
        .with_temperature(config.model.temperature)
        .with_api_base(config.model.api_base.clone())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let dotenv_file = dotenv::load();
    let args = cli::parse();

    let resolved = app::resolve_config(&args);
    let directive = args
        .log_level
        .as_deref()
        .map(|level| format!("minichat={level}"))
        .unwrap_or_else(|| {
            let level = resolved
                .as_ref()
                .map(|config| config.logging.level)
                .unwrap_or_default();
            level.as_directive().to_string()
        });
    init_logging(&directive);

    tracing::info!("minichat v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(path) = &dotenv_file {
        tracing::info!("Loaded environment from {}", path.display());
    }

    let config = match resolved {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Config load failed: {e}");
            let _ = render::status(&mut std::io::stdout(), Status::Error, &e.to_string());
            return ExitCode::FAILURE;
        }
    };

    let provider = Arc::new(GeminiProvider::new(gemini_config(&config)));
    let input = tokio::io::BufReader::new(tokio::io::stdin());
    match app::run(&config, provider, input, std::io::stdout()).await {
        Ok(outcome) => {
            tracing::info!(?outcome, "Shutdown complete");
            outcome.exit_code()
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
