//! Drively API server

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use drively_web::{config::Config, routes, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("drively_web=debug,tower_http=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let addr = config.bind_addr();
    info!(
        "Config: currency={}, session idle={:?}, mock auth delay={:?}",
        config.currency, config.session_idle, config.mock_auth_delay
    );

    let app = routes::app(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Drively API listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
