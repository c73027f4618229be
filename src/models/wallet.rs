use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A named monetary account owned by a user, as stored in `user_wallet`.
///
/// Serialized with PascalCase keys (`ID`, `UserID`, ...). `created_at` is only
/// `None` in the echo returned by an update that matched no row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Wallet {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "UserID")]
    pub user_id: i64,
    #[serde(rename = "UserName")]
    pub user_name: String,
    #[serde(rename = "WalletName")]
    pub wallet_name: String,
    #[serde(rename = "WalletType")]
    pub wallet_type: String,
    #[serde(rename = "Balance", serialize_with = "crate::utils::balance::serialize")]
    pub balance: f64,
    #[serde(rename = "CreatedAt")]
    pub created_at: Option<DateTime<Utc>>,
}

/// The mutable fields of a wallet, as sent by clients on create and update.
///
/// Keys are snake_case; the PascalCase response keys are accepted too so a
/// fetched wallet can be sent back as-is. Absent fields take their zero value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct WalletInput {
    #[serde(alias = "UserID")]
    pub user_id: i64,
    #[serde(alias = "UserName")]
    pub user_name: String,
    #[serde(alias = "WalletName")]
    pub wallet_name: String,
    #[serde(alias = "WalletType")]
    pub wallet_type: String,
    #[serde(alias = "Balance")]
    pub balance: f64,
}

impl WalletInput {
    pub fn into_wallet(self, id: i64, created_at: Option<DateTime<Utc>>) -> Wallet {
        Wallet {
            id,
            user_id: self.user_id,
            user_name: self.user_name,
            wallet_name: self.wallet_name,
            wallet_type: self.wallet_type,
            balance: self.balance,
            created_at,
        }
    }
}

/// Body of every failed response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorMessage {
    pub message: String,
}
