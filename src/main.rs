use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use plantgo_server::ServerConfig;

/// Demo backend for PlantGo: simulated plant identification over
/// WebSocket plus the riddle quiz API.
#[derive(Debug, Parser)]
#[command(name = "plantgo", version)]
struct Args {
    /// Host to bind.
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to bind.
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Directory served for unmatched routes.
    #[arg(long, default_value = "./static")]
    static_dir: PathBuf,

    /// Simulated classifier latency in milliseconds.
    #[arg(long, default_value_t = 100)]
    inference_delay_ms: u64,
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = ServerConfig {
        host: args.host,
        port: args.port,
        static_dir: args.static_dir,
        inference_delay: Duration::from_millis(args.inference_delay_ms),
    };

    let handle = plantgo_server::start(config)
        .await
        .expect("Failed to start server");

    tracing::info!(port = handle.port, "PlantGo backend ready");
    tracing::info!("WebSocket endpoint: ws://localhost:{}/ws", handle.port);
    tracing::info!("Health check: http://localhost:{}/health", handle.port);
    tracing::info!("Riddle API: http://localhost:{}/riddles", handle.port);

    // Wait for shutdown signal
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for ctrl+c");

    tracing::info!("Shutting down");
}
