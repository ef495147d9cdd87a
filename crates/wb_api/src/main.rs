use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use wb_api::{AppState, ServerConfig, create_app};

/// Command line arguments for the weight and balance server
#[derive(Parser, Debug)]
#[command(name = "wb-server")]
#[command(about = "Aircraft weight and balance calculator service")]
struct Args {
    /// Path to the server configuration JSON file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to bind the server to, overrides the configuration file
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt().pretty().init();

    let mut config = match &args.config {
        Some(path) => {
            let config_content = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
            let config: ServerConfig = serde_json::from_str(&config_content)
                .with_context(|| format!("Failed to parse config file '{}'", path.display()))?;
            tracing::info!("Loaded server config from {}", path.display());
            config
        }
        None => ServerConfig::default(),
    };
    if let Some(port) = args.port {
        config.port = port;
    }

    let app_state = AppState::with_max_sessions(config.default_aircraft, config.max_sessions);
    tracing::info!(
        "New sessions default to {}, keeping at most {} open",
        app_state.default_aircraft(),
        config.max_sessions
    );
    let app = create_app(app_state);

    let bind_addr = config.bind_addr();
    tracing::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
