use async_trait::async_trait;

use super::{parse_id, StoreResult, Storer};
use crate::database::DatabasePool;
use crate::models::{Wallet, WalletInput};

const WALLET_COLUMNS: &str =
    "id, user_id, user_name, wallet_name, wallet_type, balance, created_at";

/// Wallet store over the `user_wallet` table.
///
/// Ids are bound as text and cast in SQL, so PostgreSQL itself rejects
/// anything that is not a bigint.
#[derive(Clone)]
pub struct PgStore {
    pool: DatabasePool,
}

impl PgStore {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DatabasePool {
        &self.pool
    }
}

#[async_trait]
impl Storer for PgStore {
    async fn wallets(&self) -> StoreResult<Vec<Wallet>> {
        let wallets = sqlx::query_as::<_, Wallet>(&format!(
            "SELECT {} FROM user_wallet",
            WALLET_COLUMNS
        ))
        .fetch_all(&*self.pool)
        .await?;

        Ok(wallets)
    }

    async fn wallets_by_user(&self, user_id: &str) -> StoreResult<Vec<Wallet>> {
        let wallets = sqlx::query_as::<_, Wallet>(&format!(
            "SELECT {} FROM user_wallet WHERE user_id = $1::BIGINT",
            WALLET_COLUMNS
        ))
        .bind(user_id)
        .fetch_all(&*self.pool)
        .await?;

        Ok(wallets)
    }

    async fn wallets_by_type(&self, wallet_type: &str) -> StoreResult<Vec<Wallet>> {
        let wallets = sqlx::query_as::<_, Wallet>(&format!(
            "SELECT {} FROM user_wallet WHERE wallet_type = $1",
            WALLET_COLUMNS
        ))
        .bind(wallet_type)
        .fetch_all(&*self.pool)
        .await?;

        Ok(wallets)
    }

    async fn create_wallet(&self, wallet: WalletInput) -> StoreResult<Wallet> {
        let created = sqlx::query_as::<_, Wallet>(&format!(
            r#"
            INSERT INTO user_wallet (user_id, user_name, wallet_name, wallet_type, balance)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            WALLET_COLUMNS
        ))
        .bind(wallet.user_id)
        .bind(&wallet.user_name)
        .bind(&wallet.wallet_name)
        .bind(&wallet.wallet_type)
        .bind(wallet.balance)
        .fetch_one(&*self.pool)
        .await?;

        Ok(created)
    }

    async fn update_wallet(&self, wallet: WalletInput, id: &str) -> StoreResult<Wallet> {
        let updated = sqlx::query_as::<_, Wallet>(&format!(
            r#"
            UPDATE user_wallet
            SET user_id = $2, user_name = $3, wallet_name = $4, wallet_type = $5, balance = $6
            WHERE id = $1::BIGINT
            RETURNING {}
            "#,
            WALLET_COLUMNS
        ))
        .bind(id)
        .bind(wallet.user_id)
        .bind(&wallet.user_name)
        .bind(&wallet.wallet_name)
        .bind(&wallet.wallet_type)
        .bind(wallet.balance)
        .fetch_optional(&*self.pool)
        .await?;

        match updated {
            Some(row) => Ok(row),
            None => {
                tracing::debug!("Update matched no wallet with id {}", id);
                Ok(wallet.into_wallet(parse_id(id)?, None))
            }
        }
    }

    async fn delete_wallet(&self, id: &str) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM user_wallet WHERE id = $1::BIGINT")
            .bind(id)
            .execute(&*self.pool)
            .await?;

        if result.rows_affected() == 0 {
            tracing::debug!("Delete matched no wallet with id {}", id);
        }

        Ok(())
    }
}
