//! Binary crate for the global weather API server.
//!
//! Startup order: load `.env`, initialize logging, read configuration once,
//! build the provider and router, bind, serve. A missing API key is logged
//! but does not stop the process; requests report it instead.

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use weather_core::{Config, OpenWeatherProvider};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env();
    if !config.is_api_key_configured() {
        tracing::warn!(
            "OPENWEATHER_API_KEY is not set; weather lookups will fail until it is configured"
        );
    }

    let provider =
        OpenWeatherProvider::new(&config).context("failed to build upstream HTTP client")?;
    let app = weather_server::router(provider, config.frontend_dir.as_deref());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!("listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
