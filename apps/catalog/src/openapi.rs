//! OpenAPI document of the catalog pages

use utoipa::{Modify, OpenApi};

/// Combined documentation: the domain documents are merged in at build time.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalogue produits",
        version = "0.1.0",
        description = "Product catalog with safety sheets, user directory and trash cans. Every route renders HTML, except the PDF summary sheet.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    modifiers(&DomainDocs)
)]
pub struct ApiDoc;

struct DomainDocs;

impl Modify for DomainDocs {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.merge(domain_products::ApiDoc::openapi());
        openapi.merge(domain_users::ApiDoc::openapi());
        openapi.merge(domain_trash_cans::ApiDoc::openapi());
    }
}
