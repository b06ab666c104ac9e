// src/main.rs
use std::sync::Arc;

use manabot::{
    shutdown_channel, CatalogClient, ChatTransport, Config, ConsoleSession, ConsoleTransport,
    HttpCatalogClient, MessageHandler,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    // 1. CONFIGURATION
    let config = Config::from_env()?;
    log::info!(
        "starting manabot against {} ({:?} responses)",
        config.catalog_base_url,
        config.response_mode
    );

    // 2. COLLABORATORS
    let catalog: Arc<dyn CatalogClient> = Arc::new(HttpCatalogClient::new(&config.catalog_base_url)?);
    let transport: Arc<dyn ChatTransport> = Arc::new(ConsoleTransport);

    // 3. PIPELINE
    let handler = Arc::new(MessageHandler::new(&config, catalog, transport));

    // 4. SESSION + LIFETIME SIGNAL
    let (disconnect, shutdown) = shutdown_channel();
    let session = ConsoleSession::new(handler);
    tokio::spawn(async move {
        if let Err(err) = session.run(disconnect).await {
            log::error!("console session failed: {}", err);
        }
    });

    // Block until the platform collaborator signals disconnect
    shutdown.wait().await;
    Ok(())
}
