//! Slash command webhook server.
//!
//! ```text
//!     Chat platform            ┌──────────────────────────────────────────┐
//!     POST /slash ────────────▶│ access log (pre) → router → handler      │
//!                              │                                 │        │
//!     JSON reply ◀─────────────│ access log (post, one line) ◀───┘        │
//!                              └──────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use slash_command_server::config::{load_config, ServerConfig};
use slash_command_server::lifecycle::{wait_for_signal, Shutdown};
use slash_command_server::observability::logging;
use slash_command_server::SlashServer;

#[derive(Parser)]
#[command(name = "slash-command-server")]
#[command(about = "Answers chat slash commands over HTTP", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address (e.g. 0.0.0.0:5004).
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init(&config.logging);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });

    SlashServer::new(config).run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
