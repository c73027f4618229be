// Library root - the binaries and tests build on these

pub mod config;
pub mod database;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod utils;

pub use config::Config;
pub use error::ApiError;
pub use routes::create_router;
pub use store::{MemoryStore, PgStore, StoreError, Storer};

use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Storer>,
}

impl AppState {
    pub fn new(store: Arc<dyn Storer>) -> Self {
        Self { store }
    }
}
