//! Abiba backend server binary.
//!
//! Relays chat messages to Groq when `GROQ_API_KEY` is set and falls back
//! to canned replies otherwise. Also serves the status/log endpoints and
//! the static console pages.

mod logging;

use std::path::PathBuf;
use std::sync::Arc;

use abiba_api::config::ApiConfig;
use abiba_api::services::chat::ChatBackend;
use abiba_api::AppState;
use abiba_core::completion::{CompletionClient, DEFAULT_BASE_URL, GroqClient};
use clap::Parser;
use clap::builder::FalseyValueParser;
use tracing::{info, warn};

/// CLI arguments for the server.
#[derive(Parser, Debug)]
#[command(name = "abiba_server", about = "Abiba backend server")]
struct Args {
    /// Address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:5000")]
    bind_addr: String,

    /// Directory containing index.html, chat.html, logs.html and security.js.
    #[arg(long, env = "STATIC_DIR", default_value = "static")]
    static_dir: PathBuf,

    /// Groq API key. Without it chat runs in simulation mode.
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    groq_api_key: Option<String>,

    /// OpenAI-compatible API root used for completions.
    #[arg(long, env = "GROQ_BASE_URL", default_value = DEFAULT_BASE_URL)]
    groq_base_url: String,

    /// Constrained hosting: no log file, fabricated `/api/logs` output.
    ///
    /// Serverless platforms set `VERCEL=1`, which turns this on. Empty,
    /// `0`, `false`, `no` and `off` leave it off.
    #[arg(
        long,
        env = "VERCEL",
        action = clap::ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    constrained: bool,

    /// Append-only log file tailed by `/api/logs`.
    #[arg(long, env = "ABIBA_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Include upstream error text in failed chat responses.
    #[arg(
        long,
        env = "EXPOSE_ERROR_DETAILS",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    expose_error_details: bool,
}

impl Args {
    fn api_config(&self) -> ApiConfig {
        ApiConfig {
            bind_addr: self.bind_addr.clone(),
            static_dir: self.static_dir.clone(),
            log_source: ApiConfig::log_source_for(self.constrained, self.log_file.clone()),
            expose_error_details: self.expose_error_details,
        }
    }

    /// A blank key counts as no key.
    fn chat_backend(&self) -> ChatBackend {
        let client = self
            .groq_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(|key| {
                Arc::new(GroqClient::with_base_url(key, self.groq_base_url.as_str()))
                    as Arc<dyn CompletionClient>
            });
        ChatBackend::from_client(client)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = args.api_config();

    let _log_guard = logging::init(config.log_file());

    info!(version = abiba_core::version(), "Abiba backend starting");

    let chat = args.chat_backend();
    match &chat {
        ChatBackend::Live(_) => info!(base_url = %args.groq_base_url, "Groq client initialized"),
        ChatBackend::Simulation => {
            warn!("GROQ_API_KEY not found, AI features will run in simulation mode")
        }
    }

    info!(
        static_dir = %config.static_dir.display(),
        log_source = ?config.log_source,
        expose_error_details = config.expose_error_details,
        "configuration loaded"
    );

    let state = AppState {
        config: config.clone(),
        chat,
    };

    let app = abiba_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;

    info!(addr = %local_addr, "REST API listening");

    axum::serve(listener, app).await?;

    Ok(())
}
