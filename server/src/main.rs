use std::sync::Arc;

use pexels_core::PexelsClient;
use pexels_server::{Config, ENDPOINTS};
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = Config::from_env()?;
    let client = Arc::new(PexelsClient::with_base_url(&config.api_key, &config.api_url));

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, upstream = %config.api_url, "starting Pexels API server");
    for endpoint in ENDPOINTS {
        tracing::info!("  {endpoint}");
    }

    pexels_server::run(listener, client).await?;
    Ok(())
}
