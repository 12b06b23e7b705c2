use axum::Router;
use domain_users::{PostgresUserRepository, UserService, handlers};
use std::sync::Arc;

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = PostgresUserRepository::new(state.db.clone());
    let service = UserService::new(repository);
    handlers::router(service, Arc::clone(&state.views))
}
