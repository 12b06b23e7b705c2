use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use axum_helpers::ValidatedQuery;
use core_views::{HtmlView, ViewEngine};
use pdf_render::PdfRenderer;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{ListQuery, Pictogram, PictogramKind, Product};
use crate::pdf;
use crate::repository::ProductRepository;
use crate::service::{ProductService, Resolved};
use crate::slug::ProductSegment;
use crate::views::{self, IndexData, ProductPageData};

const TAG: &str = "products";

/// OpenAPI documentation for the product pages
#[derive(OpenApi)]
#[openapi(
    paths(list_products, show_product, security_form, download_summary_sheet),
    components(schemas(Product, Pictogram, PictogramKind)),
    tags(
        (name = TAG, description = "Product catalog pages")
    )
)]
pub struct ApiDoc;

/// Shared state of the product routes
pub struct ProductState<R: ProductRepository> {
    pub service: ProductService<R>,
    pub views: Arc<ViewEngine>,
    pub pdf: Arc<dyn PdfRenderer>,
}

/// Create the product router
///
/// The engine must have the product templates registered
/// (see [`views::register_templates`]).
pub fn router<R: ProductRepository + 'static>(
    service: ProductService<R>,
    views: Arc<ViewEngine>,
    pdf: Arc<dyn PdfRenderer>,
) -> Router {
    let shared_state = Arc::new(ProductState {
        service,
        views,
        pdf,
    });

    Router::new()
        .route("/", get(list_products))
        .route("/products/{slug_id}", get(show_product))
        .route("/products/{slug_id}/securityForm", get(security_form))
        .route("/products/{slug_id}/download", get(download_summary_sheet))
        .with_state(shared_state)
}

/// `301 Moved Permanently` to the canonical product URL.
fn moved_permanently(location: String) -> Response {
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response()
}

/// Product listing with search filter and pagination
#[utoipa::path(
    get,
    path = "/",
    tag = TAG,
    params(ListQuery),
    responses(
        (status = 200, description = "Listing page", content_type = "text/html", body = String),
        (status = 400, description = "Invalid page number or search filter", content_type = "text/html", body = String)
    )
)]
async fn list_products<R: ProductRepository>(
    State(state): State<Arc<ProductState<R>>>,
    ValidatedQuery(query): ValidatedQuery<ListQuery>,
) -> ProductResult<HtmlView> {
    let search = query.search();
    let page = state.service.list_products(&search, query.page()).await?;
    let pictograms = state.service.list_pictograms().await?;

    let data = IndexData::new(&page, &search, &pictograms);
    Ok(state.views.view(views::INDEX, &data)?)
}

/// Product detail
#[utoipa::path(
    get,
    path = "/products/{slug_id}",
    tag = TAG,
    params(
        ("slug_id" = String, Path, description = "`{slug}-{id}`, e.g. `acetone-1`")
    ),
    responses(
        (status = 200, description = "Detail page", content_type = "text/html", body = String),
        (status = 301, description = "Stale slug, redirect to the canonical URL"),
        (status = 404, description = "Unknown product", content_type = "text/html", body = String)
    )
)]
async fn show_product<R: ProductRepository>(
    State(state): State<Arc<ProductState<R>>>,
    segment: ProductSegment,
) -> ProductResult<Response> {
    match state.service.resolve(&segment).await? {
        Resolved::Product(product) => {
            let data = ProductPageData::new(product.french_name.clone(), &product);
            Ok(state.views.view(views::SHOW, &data)?.into_response())
        }
        Resolved::Moved(location) => Ok(moved_permanently(location)),
    }
}

/// Product security form
#[utoipa::path(
    get,
    path = "/products/{slug_id}/securityForm",
    tag = TAG,
    params(
        ("slug_id" = String, Path, description = "`{slug}-{id}`, e.g. `acetone-1`")
    ),
    responses(
        (status = 200, description = "Security form page", content_type = "text/html", body = String),
        (status = 301, description = "Stale slug, redirect to the canonical detail URL"),
        (status = 404, description = "Unknown product", content_type = "text/html", body = String)
    )
)]
async fn security_form<R: ProductRepository>(
    State(state): State<Arc<ProductState<R>>>,
    segment: ProductSegment,
) -> ProductResult<Response> {
    match state.service.resolve(&segment).await? {
        Resolved::Product(product) => {
            let title = format!("Fiche de sécurité {}", product.french_name);
            let data = ProductPageData::new(title, &product);
            Ok(state.views.view(views::SECURITY_FORM, &data)?.into_response())
        }
        Resolved::Moved(location) => Ok(moved_permanently(location)),
    }
}

/// Product summary sheet as an inline PDF
#[utoipa::path(
    get,
    path = "/products/{slug_id}/download",
    tag = TAG,
    params(
        ("slug_id" = String, Path, description = "`{slug}-{id}`, e.g. `acetone-1`")
    ),
    responses(
        (status = 200, description = "`<name>_fiche_resume.pdf`, displayed inline", content_type = "application/pdf", body = Vec<u8>),
        (status = 301, description = "Stale slug, redirect to the canonical detail URL"),
        (status = 404, description = "Unknown product", content_type = "text/html", body = String),
        (status = 500, description = "Template or PDF rendering failure", content_type = "text/html", body = String)
    )
)]
async fn download_summary_sheet<R: ProductRepository>(
    State(state): State<Arc<ProductState<R>>>,
    segment: ProductSegment,
) -> ProductResult<Response> {
    match state.service.resolve(&segment).await? {
        Resolved::Product(product) => {
            let download =
                pdf::export_summary_sheet(&state.views, Arc::clone(&state.pdf), &product).await?;
            Ok(download.into_response())
        }
        Resolved::Moved(location) => Ok(moved_permanently(location)),
    }
}
