use axum::Router;
use tower_http::services::ServeDir;

pub mod health;
pub mod products;
pub mod trash_cans;
pub mod users;

/// Page routes of every domain plus the static assets.
///
/// Every sub-router has its state applied, so the result is stateless and
/// can be handed to `create_router`.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new()
        .merge(products::router(state))
        .merge(users::router(state))
        .merge(trash_cans::router(state))
        .nest_service("/static", ServeDir::new(&state.config.static_dir))
}

/// Router with the `/ready` endpoint, checking the database connection.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
