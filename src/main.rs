use clap::Parser;
use log::{info, warn};
use tracing_subscriber::EnvFilter;

use wiz_hue_bridge::{AppState, Config, router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    init_tracing(&config);

    let app = router(AppState::from_config(&config));
    let listener = tokio::net::TcpListener::bind(config.listen).await?;
    info!(
        "listening on {} (domain: {})",
        listener.local_addr()?,
        config.domain().unwrap_or("none")
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

fn init_tracing(config: &Config) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_target(false)
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("cannot listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
