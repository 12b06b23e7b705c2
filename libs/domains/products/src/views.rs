//! Page templates and the data they are rendered with.

use core_views::{ViewEngine, ViewResult};
use serde::Serialize;

use crate::models::{Pictogram, Product, ProductPage, ProductSearch};

pub const INDEX: &str = "product/index";
pub const SHOW: &str = "product/show";
pub const SECURITY_FORM: &str = "product/security_form";
pub const SUMMARY_SHEET: &str = "product/summary_sheet";

const TEMPLATES: [(&str, &str); 4] = [
    (INDEX, include_str!("../templates/index.hbs")),
    (SHOW, include_str!("../templates/show.hbs")),
    (SECURITY_FORM, include_str!("../templates/security_form.hbs")),
    (SUMMARY_SHEET, include_str!("../templates/summary_sheet.hbs")),
];

/// Register the product pages on the shared engine.
pub fn register_templates(engine: &mut ViewEngine) -> ViewResult<()> {
    engine.register_templates(TEMPLATES)
}

/// Product plus the derived fields templates cannot compute.
#[derive(Debug, Serialize)]
pub struct ProductView<'a> {
    #[serde(flatten)]
    pub product: &'a Product,
    pub path: String,
    pub security_form_path: String,
    pub download_path: String,
    /// `dd/mm/yyyy`
    pub updated_on: String,
}

impl<'a> ProductView<'a> {
    pub fn new(product: &'a Product) -> Self {
        let path = product.path();
        Self {
            product,
            security_form_path: format!("{}/securityForm", path),
            download_path: format!("{}/download", path),
            updated_on: product.updated_on(),
            path,
        }
    }

    /// Data of the summary sheet template
    pub fn summary_sheet(product: &'a Product) -> ProductPageData<'a> {
        ProductPageData {
            title: format!("Fiche résumé {}", product.french_name),
            product: Self::new(product),
        }
    }
}

/// Data of the detail, security form and summary sheet pages
#[derive(Debug, Serialize)]
pub struct ProductPageData<'a> {
    pub title: String,
    pub product: ProductView<'a>,
}

impl<'a> ProductPageData<'a> {
    pub fn new(title: impl Into<String>, product: &'a Product) -> Self {
        Self {
            title: title.into(),
            product: ProductView::new(product),
        }
    }
}

#[derive(Debug, Serialize)]
struct PictogramOption<'a> {
    id: i32,
    code: &'a str,
    label: &'a str,
    selected: bool,
}

#[derive(Debug, Serialize)]
struct SearchFormView<'a> {
    name: &'a str,
    pictograms: Vec<PictogramOption<'a>>,
}

#[derive(Debug, Serialize)]
struct PagerView {
    page: u64,
    total_pages: u64,
    total: u64,
    previous: Option<String>,
    next: Option<String>,
}

/// Data of the listing page
#[derive(Debug, Serialize)]
pub struct IndexData<'a> {
    title: &'static str,
    products: Vec<ProductView<'a>>,
    search: SearchFormView<'a>,
    pager: PagerView,
}

impl<'a> IndexData<'a> {
    pub fn new(page: &'a ProductPage, search: &'a ProductSearch, pictograms: &'a [Pictogram]) -> Self {
        let link = |target: u64| listing_url(search, target);

        Self {
            title: "Produits",
            products: page.items.iter().map(ProductView::new).collect(),
            search: SearchFormView {
                name: search.name.as_deref().unwrap_or_default(),
                pictograms: pictograms
                    .iter()
                    .map(|p| PictogramOption {
                        id: p.id,
                        code: &p.code,
                        label: &p.label,
                        selected: search.pictogram == Some(p.id),
                    })
                    .collect(),
            },
            pager: PagerView {
                page: page.page,
                total_pages: page.total_pages(),
                total: page.total,
                previous: page.has_previous().then(|| link(page.page - 1)),
                next: page.has_next().then(|| link(page.page + 1)),
            },
        }
    }
}

/// Listing URL for `page`, keeping the search parameters.
pub fn listing_url(search: &ProductSearch, page: u64) -> String {
    let mut url = format!("/?page={}", page);
    if let Some(name) = &search.name {
        url.push_str("&name=");
        url.push_str(&urlencoding::encode(name));
    }
    if let Some(pictogram) = search.pictogram {
        url.push_str(&format!("&pictogram={}", pictogram));
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn product() -> Product {
        Product {
            id: 8,
            slug: "peroxyde-d-hydrogene".to_string(),
            french_name: "Peroxyde d'hydrogène".to_string(),
            english_name: Some("Hydrogen peroxide".to_string()),
            description: "Oxydant".to_string(),
            safety_instructions: "Porter des gants".to_string(),
            updated_at: Utc.with_ymd_and_hms(2024, 2, 3, 12, 0, 0).unwrap(),
            danger_pictograms: vec![],
            obligation_pictograms: vec![],
        }
    }

    fn engine() -> ViewEngine {
        let mut engine = ViewEngine::new().unwrap();
        register_templates(&mut engine).unwrap();
        engine
    }

    #[test]
    fn test_all_templates_register() {
        let engine = engine();
        for (name, _) in TEMPLATES {
            assert!(engine.has_template(name), "{} missing", name);
        }
    }

    #[test]
    fn test_product_view_derived_fields() {
        let product = product();
        let view = ProductView::new(&product);
        assert_eq!(view.path, "/products/peroxyde-d-hydrogene-8");
        assert_eq!(view.download_path, "/products/peroxyde-d-hydrogene-8/download");
        assert_eq!(view.updated_on, "03/02/2024");

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["french_name"], "Peroxyde d'hydrogène");
        assert_eq!(json["security_form_path"], "/products/peroxyde-d-hydrogene-8/securityForm");
    }

    #[test]
    fn test_listing_url_keeps_search() {
        let search = ProductSearch {
            name: Some("acide sulfurique".to_string()),
            pictogram: Some(5),
        };
        assert_eq!(listing_url(&search, 2), "/?page=2&name=acide%20sulfurique&pictogram=5");
        assert_eq!(listing_url(&ProductSearch::default(), 1), "/?page=1");
    }

    #[test]
    fn test_summary_sheet_renders_title_and_date() {
        let product = product();
        let html = engine()
            .render(SUMMARY_SHEET, &ProductView::summary_sheet(&product))
            .unwrap();
        assert!(html.contains("<title>Fiche résumé Peroxyde d&#x27;hydrogène</title>"));
        assert!(html.contains("03/02/2024"));
    }
}
