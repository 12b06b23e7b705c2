use axum::Router;
use domain_products::{PgProductRepository, ProductService, handlers};
use std::sync::Arc;

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = PgProductRepository::new(state.db.clone());
    let service = ProductService::new(repository);
    handlers::router(service, Arc::clone(&state.views), Arc::clone(&state.pdf))
}
