//! Persistence for wallets.
//!
//! Handlers only ever see [`Storer`]; [`PgStore`] is the PostgreSQL backend and
//! [`MemoryStore`] an in-process one for tests and database-less runs.
//! Identifiers are passed through as the raw path text: turning them into
//! integers is the backend's job, and a non-numeric id is a [`StoreError`].

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::models::{Wallet, WalletInput};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Opaque failure from the persistence layer; carries only the backend's text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct StoreError {
    message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        Self::new(err.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// The six single-statement wallet operations.
#[async_trait]
pub trait Storer: Send + Sync {
    /// Every wallet, in whatever order the backend returns them.
    async fn wallets(&self) -> StoreResult<Vec<Wallet>>;

    /// Wallets whose `user_id` equals `user_id`. No match is an empty list.
    async fn wallets_by_user(&self, user_id: &str) -> StoreResult<Vec<Wallet>>;

    /// Wallets whose `wallet_type` equals `wallet_type` exactly (case-sensitive).
    async fn wallets_by_type(&self, wallet_type: &str) -> StoreResult<Vec<Wallet>>;

    /// Inserts a wallet; the backend assigns `id` and `created_at`.
    async fn create_wallet(&self, wallet: WalletInput) -> StoreResult<Wallet>;

    /// Overwrites every mutable field of wallet `id`.
    ///
    /// Matching nothing is not an error: the submitted fields come back with
    /// `id` filled in and `created_at` left empty.
    async fn update_wallet(&self, wallet: WalletInput, id: &str) -> StoreResult<Wallet>;

    /// Removes wallet `id`. Matching nothing is not an error.
    async fn delete_wallet(&self, id: &str) -> StoreResult<()>;
}

/// Parse an id the way PostgreSQL's `bigint` input does (surrounding blanks allowed).
pub(crate) fn parse_id(id: &str) -> StoreResult<i64> {
    id.trim()
        .parse::<i64>()
        .map_err(|_| StoreError::new(format!("invalid input syntax for type bigint: \"{}\"", id)))
}
