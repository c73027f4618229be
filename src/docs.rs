use axum::response::Json;
use utoipa::OpenApi;

use crate::models::{ErrorMessage, Wallet, WalletInput};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::wallets::list_wallets,
        crate::handlers::wallets::list_wallets_by_type,
        crate::handlers::wallets::list_wallets_by_user,
        crate::handlers::wallets::create_wallet,
        crate::handlers::wallets::update_wallet,
        crate::handlers::wallets::delete_wallet
    ),
    components(schemas(Wallet, WalletInput, ErrorMessage)),
    tags(
        (name = "wallet", description = "Wallet CRUD endpoints")
    ),
    info(
        title = "Wallet API",
        description = "Sophisticated Wallet API",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
