use axum::{
    Form, Router,
    extract::{State, rejection::FormRejection},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use core_views::{FormErrors, HtmlView, ViewEngine};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::TrashCanResult;
use crate::models::{TrashCan, TrashCanForm};
use crate::repository::TrashCanRepository;
use crate::service::TrashCanService;
use crate::views::{self, FormData, IndexData};

const TAG: &str = "trash-cans";

/// OpenAPI documentation for the trash can pages
#[derive(OpenApi)]
#[openapi(
    paths(list_trash_cans, new_trash_can, create_trash_can),
    components(schemas(TrashCan, TrashCanForm)),
    tags(
        (name = TAG, description = "Trash can list and form")
    )
)]
pub struct ApiDoc;

/// Shared state of the trash can routes
pub struct TrashCanState<R: TrashCanRepository> {
    pub service: TrashCanService<R>,
    pub views: Arc<ViewEngine>,
}

/// Create the trash can router
pub fn router<R: TrashCanRepository + 'static>(
    service: TrashCanService<R>,
    views: Arc<ViewEngine>,
) -> Router {
    let shared_state = Arc::new(TrashCanState { service, views });

    Router::new()
        .route("/trash-cans", get(list_trash_cans).post(create_trash_can))
        .route("/trash-cans/new", get(new_trash_can))
        .with_state(shared_state)
}

fn form_page(engine: &ViewEngine, form: &TrashCanForm, errors: &FormErrors) -> TrashCanResult<HtmlView> {
    let data = FormData {
        title: "Nouvelle poubelle",
        form: TrashCanForm::definition().view(&form.values(), errors),
    };
    Ok(engine.view(views::NEW, &data)?)
}

/// List trash cans
#[utoipa::path(
    get,
    path = "/trash-cans",
    tag = TAG,
    responses(
        (status = 200, description = "Trash cans ordered by name", content_type = "text/html", body = String)
    )
)]
async fn list_trash_cans<R: TrashCanRepository>(
    State(state): State<Arc<TrashCanState<R>>>,
) -> TrashCanResult<HtmlView> {
    let trash_cans = state.service.list_trash_cans().await?;
    let data = IndexData {
        title: "Poubelles",
        trash_cans: &trash_cans,
    };
    Ok(state.views.view(views::INDEX, &data)?)
}

/// Empty trash can form
#[utoipa::path(
    get,
    path = "/trash-cans/new",
    tag = TAG,
    responses(
        (status = 200, description = "Trash can form", content_type = "text/html", body = String)
    )
)]
async fn new_trash_can<R: TrashCanRepository>(
    State(state): State<Arc<TrashCanState<R>>>,
) -> TrashCanResult<HtmlView> {
    form_page(&state.views, &TrashCanForm::default(), &FormErrors::default())
}

/// Create a trash can
///
/// Redirects to the list on success; re-renders the form with its errors otherwise.
#[utoipa::path(
    post,
    path = "/trash-cans",
    tag = TAG,
    request_body(content = TrashCanForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Created, redirect to the list"),
        (status = 422, description = "Form re-rendered with field errors", content_type = "text/html", body = String)
    )
)]
async fn create_trash_can<R: TrashCanRepository>(
    State(state): State<Arc<TrashCanState<R>>>,
    form: Result<Form<TrashCanForm>, FormRejection>,
) -> TrashCanResult<Response> {
    let Form(form) = form?;

    match form.bind() {
        Ok(input) => {
            state.service.create_trash_can(input).await?;
            Ok(Redirect::to("/trash-cans").into_response())
        }
        Err(errors) => {
            tracing::info!(?errors, "Invalid trash can form");
            let page = form_page(&state.views, &form, &FormErrors::from_validation(&errors))?;
            Ok(page.with_status(StatusCode::UNPROCESSABLE_ENTITY).into_response())
        }
    }
}
