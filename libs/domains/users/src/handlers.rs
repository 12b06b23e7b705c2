use axum::{
    Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    routing::get,
};
use core_views::{FormErrors, HtmlView, ViewEngine};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::models::{SortOrder, User, UserSearchForm};
use crate::repository::UserRepository;
use crate::service::UserService;
use crate::views::{self, IndexData};

const TAG: &str = "users";

/// OpenAPI documentation for the user directory
#[derive(OpenApi)]
#[openapi(
    paths(search_users),
    components(schemas(User, SortOrder)),
    tags(
        (name = TAG, description = "User directory search")
    )
)]
pub struct ApiDoc;

/// Shared state of the user routes
pub struct UserState<R: UserRepository> {
    pub service: UserService<R>,
    pub views: Arc<ViewEngine>,
}

/// Create the users router
pub fn router<R: UserRepository + 'static>(service: UserService<R>, views: Arc<ViewEngine>) -> Router {
    let shared_state = Arc::new(UserState { service, views });

    Router::new()
        .route("/users", get(search_users))
        .with_state(shared_state)
}

/// Search the user directory
///
/// An invalid form is re-rendered with its field errors and no query runs.
#[utoipa::path(
    get,
    path = "/users",
    tag = TAG,
    params(UserSearchForm),
    responses(
        (status = 200, description = "Directory page with matching users", content_type = "text/html", body = String),
        (status = 422, description = "Form re-rendered with field errors", content_type = "text/html", body = String)
    )
)]
async fn search_users<R: UserRepository>(
    State(state): State<Arc<UserState<R>>>,
    query: Result<Query<UserSearchForm>, QueryRejection>,
) -> UserResult<HtmlView> {
    let Query(form) = query?;
    let definition = UserSearchForm::definition();

    match form.bind() {
        Ok(search) => {
            let users = state.service.search_users(&search).await?;
            let form_view = definition.view(&form.values(), &FormErrors::default());
            Ok(state.views.view(views::INDEX, &IndexData::new(form_view, &users))?)
        }
        Err(errors) => {
            tracing::info!(?errors, "Invalid user search");
            let form_view = definition.view(&form.values(), &FormErrors::from_validation(&errors));
            Ok(state
                .views
                .view(views::INDEX, &IndexData::new(form_view, &[]))?
                .with_status(StatusCode::UNPROCESSABLE_ENTITY))
        }
    }
}
