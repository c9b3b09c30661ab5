mod cli;

use crate::cli::Cli;
use burrow_gateway::{App, AppState};
use burrow_generator::{HashidsGenerator, HashidsSettings};
use burrow_storage::InMemoryStore;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse();
    burrow_telemetry::init(config.log_format.into())?;

    let settings = HashidsSettings::builder()
        .min_length(config.min_length)
        .build();
    let generator = HashidsGenerator::new(settings);

    let listener = TcpListener::bind(config.listen_addr).await?;
    let local_addr = listener.local_addr()?;

    info!(
        listen_addr = %local_addr,
        min_length = config.min_length,
        public_base_url = config.public_base_url.as_deref().unwrap_or("-"),
        log_format = %config.log_format,
        "starting gateway server"
    );

    let mut state = AppState::new(generator, InMemoryStore::new(), local_addr.to_string());
    if let Some(public_base_url) = config.public_base_url {
        state = state.with_public_base_url(public_base_url);
    }

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
