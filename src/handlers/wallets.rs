use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::ApiError;
use crate::models::{ErrorMessage, Wallet, WalletInput};
use crate::AppState;

/// Body returned by a successful delete.
pub const WALLET_DELETED: &str = "Wallet deleted";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WalletTypeQuery {
    /// Exact, case-sensitive wallet type to filter by
    pub wallet_type: Option<String>,
}

/// Query pairs as sent. A repeated key is not an error; the first one wins.
type QueryPairs = Result<Query<Vec<(String, String)>>, QueryRejection>;

fn first_wallet_type(pairs: QueryPairs) -> Result<Option<String>, ApiError> {
    let Query(pairs) = pairs?;
    Ok(pairs
        .into_iter()
        .find(|(key, _)| key == "wallet_type")
        .map(|(_, value)| value))
}

/// List every wallet, or only one type when `wallet_type` is present.
#[utoipa::path(
    get,
    path = "/api/v1/wallets",
    tag = "wallet",
    params(WalletTypeQuery),
    responses(
        (status = 200, description = "Wallets", body = [Wallet]),
        (status = 400, description = "Malformed query", body = ErrorMessage),
        (status = 500, description = "Store failure", body = ErrorMessage)
    )
)]
pub async fn list_wallets(
    State(state): State<AppState>,
    query: QueryPairs,
) -> Result<Json<Vec<Wallet>>, ApiError> {
    let wallets = match first_wallet_type(query)? {
        Some(wallet_type) => state.store.wallets_by_type(&wallet_type).await?,
        None => state.store.wallets().await?,
    };
    Ok(Json(wallets))
}

/// Filter by type; a missing `wallet_type` filters by the empty string.
#[utoipa::path(
    get,
    path = "/api/v1/wallets/wallet",
    tag = "wallet",
    params(WalletTypeQuery),
    responses(
        (status = 200, description = "Wallets of the given type", body = [Wallet]),
        (status = 500, description = "Store failure", body = ErrorMessage)
    )
)]
pub async fn list_wallets_by_type(
    State(state): State<AppState>,
    query: QueryPairs,
) -> Result<Json<Vec<Wallet>>, ApiError> {
    let wallet_type = first_wallet_type(query)?.unwrap_or_default();
    let wallets = state.store.wallets_by_type(&wallet_type).await?;
    Ok(Json(wallets))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/wallets",
    tag = "wallet",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "Wallets owned by the user", body = [Wallet]),
        (status = 400, description = "Malformed id", body = ErrorMessage),
        (status = 500, description = "Store failure", body = ErrorMessage)
    )
)]
pub async fn list_wallets_by_user(
    State(state): State<AppState>,
    user_id: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<Wallet>>, ApiError> {
    let Path(user_id) = user_id?;
    let wallets = state.store.wallets_by_user(&user_id).await?;
    Ok(Json(wallets))
}

#[utoipa::path(
    post,
    path = "/api/v1/wallets",
    tag = "wallet",
    request_body = WalletInput,
    responses(
        (status = 201, description = "Wallet created", body = Wallet),
        (status = 400, description = "Malformed body", body = ErrorMessage),
        (status = 500, description = "Store failure", body = ErrorMessage)
    )
)]
pub async fn create_wallet(
    State(state): State<AppState>,
    payload: Result<Json<WalletInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Wallet>), ApiError> {
    let Json(input) = payload?;
    let wallet = state.store.create_wallet(input).await?;
    tracing::info!("Created wallet {} for user {}", wallet.id, wallet.user_id);
    Ok((StatusCode::CREATED, Json(wallet)))
}

/// Overwrite every mutable field. An id that matches nothing still answers 201.
#[utoipa::path(
    put,
    path = "/api/v1/wallets/{id}",
    tag = "wallet",
    params(("id" = String, Path, description = "Wallet ID")),
    request_body = WalletInput,
    responses(
        (status = 201, description = "Wallet updated", body = Wallet),
        (status = 400, description = "Malformed id or body", body = ErrorMessage),
        (status = 500, description = "Store failure", body = ErrorMessage)
    )
)]
pub async fn update_wallet(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    payload: Result<Json<WalletInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Wallet>), ApiError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    let wallet = state.store.update_wallet(input, &id).await?;
    Ok((StatusCode::CREATED, Json(wallet)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}/wallets",
    tag = "wallet",
    params(("id" = String, Path, description = "Wallet ID")),
    responses(
        (status = 200, description = "Wallet deleted", body = String),
        (status = 400, description = "Malformed id", body = ErrorMessage),
        (status = 500, description = "Store failure", body = ErrorMessage)
    )
)]
pub async fn delete_wallet(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<&'static str>, ApiError> {
    let Path(id) = id?;
    state.store.delete_wallet(&id).await?;
    Ok(Json(WALLET_DELETED))
}
