use anyhow::Result;
use tracing::info;

mod account;
mod api;
mod auth;
mod config;
mod db;
mod error;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("user_api=info".parse()?)
        )
        .init();

    info!("Starting user-api v{}", env!("CARGO_PKG_VERSION"));

    let cfg = config::load()?;
    info!("Configuration loaded");

    let db_pool = db::init(&cfg).await?;
    info!("Database initialized");

    api::serve(cfg, db_pool).await?;

    Ok(())
}
