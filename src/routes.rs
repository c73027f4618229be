use axum::{routing::get, routing::put, Router};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::{docs, error, handlers, AppState};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        .nest("/api/v1", wallet_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(error::panic_response))
        .with_state(state)
}

fn wallet_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/wallets",
            get(handlers::list_wallets).post(handlers::create_wallet),
        )
        .route("/wallets/wallet", get(handlers::list_wallets_by_type))
        .route("/wallets/user/:id", get(handlers::list_wallets_by_user))
        .route("/wallets/:id", put(handlers::update_wallet))
        .route(
            "/users/:id/wallets",
            get(handlers::list_wallets_by_user).delete(handlers::delete_wallet),
        )
}

async fn health_check() -> &'static str {
    "OK"
}
