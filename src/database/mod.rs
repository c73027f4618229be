use sqlx::postgres::{PgPool, PgPoolOptions};
use std::sync::Arc;

use crate::config::Config;

pub type DatabasePool = Arc<PgPool>;

/// Table definition applied by the `seed_wallets` binary.
pub const USER_WALLET_SCHEMA: &str = include_str!("../../db/user_wallet.sql");

pub async fn create_pool(config: &Config) -> anyhow::Result<PgPool> {
    // sslmode in DATABASE_URL decides whether native-tls is used
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await?;

    let url = &config.database_url;
    if url.contains("sslmode=require") || url.contains("sslmode=prefer") {
        tracing::info!("Database connection configured to use TLS");
    } else if !url.contains("localhost") && !url.contains("127.0.0.1") {
        tracing::warn!("Connecting to remote database without explicit sslmode. Consider adding sslmode=require");
    }

    Ok(pool)
}

pub async fn new_pool(config: &Config) -> anyhow::Result<DatabasePool> {
    let pool = create_pool(config).await?;
    Ok(Arc::new(pool))
}
