use crate::models::{Wallet, WalletInput};
use crate::store::Storer;

/// Sample wallets: three for John Doe (user 1), one for Jane Doe (user 2).
pub fn sample_wallets() -> Vec<WalletInput> {
    let wallet = |user_id: i64, user_name: &str, wallet_name: &str, wallet_type: &str, balance: f64| {
        WalletInput {
            user_id,
            user_name: user_name.to_string(),
            wallet_name: wallet_name.to_string(),
            wallet_type: wallet_type.to_string(),
            balance,
        }
    };

    vec![
        wallet(1, "John Doe", "John Savings", "Savings", 1000.0),
        wallet(1, "John Doe", "John Credit Card", "Credit Card", 0.0),
        wallet(1, "John Doe", "John Crypto", "Crypto Wallet", 250.5),
        wallet(2, "Jane Doe", "Jane Savings", "Savings", 500.0),
    ]
}

/// Insert the sample wallets unless the store already holds data.
/// Returns the wallets that were created.
pub async fn seed_sample_wallets(store: &dyn Storer) -> anyhow::Result<Vec<Wallet>> {
    let existing = store.wallets().await?;
    if !existing.is_empty() {
        tracing::info!("Store already has {} wallets, skipping seed", existing.len());
        return Ok(Vec::new());
    }

    let mut created = Vec::new();
    for input in sample_wallets() {
        created.push(store.create_wallet(input).await?);
    }

    tracing::info!("Seeded {} sample wallets", created.len());
    Ok(created)
}
