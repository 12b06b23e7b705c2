use axum::Router;
use domain_trash_cans::{PgTrashCanRepository, TrashCanService, handlers};
use std::sync::Arc;

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = PgTrashCanRepository::new(state.db.clone());
    let service = TrashCanService::new(repository);
    handlers::router(service, Arc::clone(&state.views))
}
