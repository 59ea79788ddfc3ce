//! Nebula Sports demo server binary.
//!
//! Serves the demo pages and JSON API over a single in-process store. All
//! state is volatile; restarting the server resets the chat log.

use std::sync::Arc;

use clap::Parser;
use nebula_api::config::{ApiConfig, bind_host};
use nebula_core::store::ContentStore;
use tracing::info;

/// CLI arguments for the demo server.
#[derive(Parser, Debug)]
#[command(name = "nebula_server", about = "Nebula Sports demo backend")]
struct Args {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 5000)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,nebula_api=debug,nebula_core=debug".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    let config = ApiConfig {
        bind_addr: format!("{}:{}", bind_host(), args.port),
    };

    info!(bind_addr = %config.bind_addr, "starting nebula_server");

    let state = nebula_api::AppState {
        store: Arc::new(ContentStore::new()),
        config: config.clone(),
    };

    let app = nebula_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;
    info!(addr = %local_addr, "Nebula Sports listening");

    axum::serve(listener, app).await?;

    Ok(())
}
