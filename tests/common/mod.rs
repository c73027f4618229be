// Shared setup for the HTTP tests: servers over the real router, a mock store,
// and request bodies.
#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use mockall::mock;
use serde_json::{json, Value};
use std::sync::Arc;

use wallet_api::models::{Wallet, WalletInput};
use wallet_api::{create_router, AppState, MemoryStore, StoreError, Storer};

mock! {
    pub Store {}

    #[async_trait]
    impl Storer for Store {
        async fn wallets(&self) -> Result<Vec<Wallet>, StoreError>;
        async fn wallets_by_user(&self, user_id: &str) -> Result<Vec<Wallet>, StoreError>;
        async fn wallets_by_type(&self, wallet_type: &str) -> Result<Vec<Wallet>, StoreError>;
        async fn create_wallet(&self, wallet: WalletInput) -> Result<Wallet, StoreError>;
        async fn update_wallet(&self, wallet: WalletInput, id: &str) -> Result<Wallet, StoreError>;
        async fn delete_wallet(&self, id: &str) -> Result<(), StoreError>;
    }
}

pub fn server_with(store: Arc<dyn Storer>) -> TestServer {
    TestServer::new(create_router(AppState::new(store))).expect("Failed to start test server")
}

/// Server backed by a fresh in-memory store; the store is returned for direct inspection.
pub fn memory_server() -> (TestServer, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let server = server_with(store.clone());
    (server, store)
}

pub fn wallet_body(user_id: i64, user_name: &str, wallet_name: &str, wallet_type: &str, balance: f64) -> Value {
    json!({
        "user_id": user_id,
        "user_name": user_name,
        "wallet_name": wallet_name,
        "wallet_type": wallet_type,
        "balance": balance
    })
}

pub fn john_savings() -> Value {
    json!({
        "user_id": 1,
        "user_name": "John Doe",
        "wallet_name": "John Savings",
        "wallet_type": "Savings",
        "balance": 1000
    })
}

pub fn sample_wallet(id: i64, user_id: i64, wallet_type: &str) -> Wallet {
    Wallet {
        id,
        user_id,
        user_name: "John Doe".to_string(),
        wallet_name: format!("Wallet {}", id),
        wallet_type: wallet_type.to_string(),
        balance: 100.0,
        created_at: None,
    }
}

/// POST a wallet and return the created entity.
pub async fn create(server: &TestServer, body: &Value) -> Wallet {
    let response = server.post("/api/v1/wallets").json(body).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Wallet>()
}
