//! filestash Server Binary
//!
//! Loads the JSON config file and starts the HTTP server.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use filestash::network::Server;
use filestash::{Config, Engine};
use tracing_subscriber::{fmt, EnvFilter};

/// filestash Server
#[derive(Parser, Debug)]
#[command(name = "filestash-server")]
#[command(about = "HTTP file store with durable writes")]
#[command(version)]
struct Args {
    /// Path to the JSON config file (must contain `storage_dir`)
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    /// Listen address (host:port), overrides the config file
    #[arg(short, long)]
    listen: Option<String>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,filestash=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("filestash Server v{}", filestash::VERSION);

    let mut config = match Config::load(&args.config) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(listen) = args.listen {
        config.listen_addr = listen;
    }

    tracing::info!("Storage directory: {}", config.storage_dir.display());
    tracing::info!("Listen address: {}", config.listen_addr);

    let engine = Arc::new(Engine::open(config));

    if let Err(e) = Server::new(engine).run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
