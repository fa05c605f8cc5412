use anyhow::Context;
use clap::Parser;
use tracing::info;

use pasta::config::Config;
use pasta::{Server, api, store, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    telemetry::init(&config.log_level, config.json_logs);

    info!(store = ?config.store, listen = %config.listen, "starting pasta");

    let store = store::open(&config)
        .await
        .context("failed to open the document store")?;

    Server::bind(config.listen)
        .serve(api::app(store))
        .await
        .context("server error")?;

    Ok(())
}
