use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{parse_id, StoreResult, Storer};
use crate::models::{Wallet, WalletInput};

/// In-process wallet store. Keeps insertion order and hands out ids from 1.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    last_id: i64,
    wallets: Vec<Wallet>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storer for MemoryStore {
    async fn wallets(&self) -> StoreResult<Vec<Wallet>> {
        Ok(self.inner.read().await.wallets.clone())
    }

    async fn wallets_by_user(&self, user_id: &str) -> StoreResult<Vec<Wallet>> {
        let user_id = parse_id(user_id)?;
        let inner = self.inner.read().await;
        Ok(inner
            .wallets
            .iter()
            .filter(|w| w.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn wallets_by_type(&self, wallet_type: &str) -> StoreResult<Vec<Wallet>> {
        let inner = self.inner.read().await;
        Ok(inner
            .wallets
            .iter()
            .filter(|w| w.wallet_type == wallet_type)
            .cloned()
            .collect())
    }

    async fn create_wallet(&self, wallet: WalletInput) -> StoreResult<Wallet> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let created = wallet.into_wallet(inner.last_id, Some(Utc::now()));
        inner.wallets.push(created.clone());
        Ok(created)
    }

    async fn update_wallet(&self, wallet: WalletInput, id: &str) -> StoreResult<Wallet> {
        let id = parse_id(id)?;
        let mut inner = self.inner.write().await;
        match inner.wallets.iter_mut().find(|w| w.id == id) {
            Some(stored) => {
                let created_at = stored.created_at;
                *stored = wallet.into_wallet(id, created_at);
                Ok(stored.clone())
            }
            None => Ok(wallet.into_wallet(id, None)),
        }
    }

    async fn delete_wallet(&self, id: &str) -> StoreResult<()> {
        let id = parse_id(id)?;
        self.inner.write().await.wallets.retain(|w| w.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(user_id: i64, name: &str, wallet_type: &str, balance: f64) -> WalletInput {
        WalletInput {
            user_id,
            user_name: "John Doe".to_string(),
            wallet_name: name.to_string(),
            wallet_type: wallet_type.to_string(),
            balance,
        }
    }

    #[tokio::test]
    async fn create_assigns_fresh_ids_and_timestamps() {
        let store = MemoryStore::new();
        let started = Utc::now();

        let first = store.create_wallet(input(1, "Savings", "Savings", 1000.0)).await.unwrap();
        let second = store.create_wallet(input(1, "Card", "Credit Card", 0.0)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(first.created_at.unwrap() >= started);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryStore::new();
        let first = store.create_wallet(input(1, "A", "Savings", 1.0)).await.unwrap();
        store.delete_wallet(&first.id.to_string()).await.unwrap();

        let next = store.create_wallet(input(1, "B", "Savings", 1.0)).await.unwrap();
        assert_eq!(next.id, 2);
    }

    #[tokio::test]
    async fn update_overwrites_fields_and_keeps_created_at() {
        let store = MemoryStore::new();
        let original = store.create_wallet(input(1, "Old", "Savings", 10.0)).await.unwrap();

        let updated = store
            .update_wallet(input(2, "New", "Crypto Wallet", 20.0), &original.id.to_string())
            .await
            .unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.user_id, 2);
        assert_eq!(updated.wallet_name, "New");
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(store.wallets().await.unwrap(), vec![updated]);
    }

    #[tokio::test]
    async fn update_of_missing_id_echoes_input_and_changes_nothing() {
        let store = MemoryStore::new();
        let original = store.create_wallet(input(1, "Keep", "Savings", 10.0)).await.unwrap();

        let echoed = store.update_wallet(input(9, "Ghost", "Savings", 1.0), "99").await.unwrap();

        assert_eq!(echoed.id, 99);
        assert_eq!(echoed.wallet_name, "Ghost");
        assert!(echoed.created_at.is_none());
        assert_eq!(store.wallets().await.unwrap(), vec![original]);
    }

    #[tokio::test]
    async fn delete_of_missing_id_succeeds() {
        let store = MemoryStore::new();
        let original = store.create_wallet(input(1, "Keep", "Savings", 10.0)).await.unwrap();

        store.delete_wallet("42").await.unwrap();

        assert_eq!(store.wallets().await.unwrap(), vec![original]);
    }

    #[tokio::test]
    async fn filters_match_exactly() {
        let store = MemoryStore::new();
        store.create_wallet(input(1, "A", "Savings", 1.0)).await.unwrap();
        store.create_wallet(input(2, "B", "savings", 1.0)).await.unwrap();
        store.create_wallet(input(1, "C", "", 1.0)).await.unwrap();

        let savings = store.wallets_by_type("Savings").await.unwrap();
        assert_eq!(savings.len(), 1);
        assert_eq!(savings[0].wallet_name, "A");

        let untyped = store.wallets_by_type("").await.unwrap();
        assert_eq!(untyped.len(), 1);
        assert_eq!(untyped[0].wallet_name, "C");

        assert_eq!(store.wallets_by_user("1").await.unwrap().len(), 2);
        assert!(store.wallets_by_user("3").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn non_numeric_ids_are_errors() {
        let store = MemoryStore::new();

        assert!(store.wallets_by_user("john").await.is_err());
        assert!(store.update_wallet(WalletInput::default(), "x").await.is_err());
        assert!(store.delete_wallet("x").await.is_err());
    }
}
