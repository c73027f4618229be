// Creates the user_wallet table and inserts the sample wallets
// Usage: cargo run --bin seed_wallets -- [--skip-schema] [--reset]

use clap::Parser;
use sqlx::Executor;

use wallet_api::database::{self, USER_WALLET_SCHEMA};
use wallet_api::services::seed_data::seed_sample_wallets;
use wallet_api::{Config, PgStore};

#[derive(Parser, Debug)]
#[command(name = "seed_wallets", about = "Prepare the wallet table with sample data")]
struct Args {
    /// Do not run the CREATE TABLE statement
    #[arg(long)]
    skip_schema: bool,

    /// Delete every wallet and restart ids before seeding
    #[arg(long)]
    reset: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wallet_api=info,seed_wallets=info".into()),
        )
        .init();

    let config = Config::from_env()?;
    let pool = database::new_pool(&config).await?;

    if !args.skip_schema {
        (&*pool).execute(USER_WALLET_SCHEMA).await?;
        println!("Table user_wallet is ready");
    }

    if args.reset {
        (&*pool).execute("TRUNCATE user_wallet RESTART IDENTITY").await?;
        println!("Removed all wallets");
    }

    let store = PgStore::new(pool);
    let created = seed_sample_wallets(&store).await?;

    for wallet in &created {
        println!(
            "Created wallet {} ({}, {}) for {}",
            wallet.id, wallet.wallet_name, wallet.wallet_type, wallet.user_name
        );
    }
    if created.is_empty() {
        println!("Wallets already present; nothing seeded");
    }

    Ok(())
}
