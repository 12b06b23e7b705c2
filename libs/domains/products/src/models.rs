use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Deserializer, Serialize};
use strum::Display;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Number of products per listing page
pub const PAGE_SIZE: u64 = 10;

/// Display format of product dates (`dd/mm/yyyy`)
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Pictogram family printed on a product's safety sheet
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "pictogram_kind")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PictogramKind {
    /// Hazard pictogram (GHS)
    #[sea_orm(string_value = "danger")]
    Danger,
    /// Mandatory protective equipment
    #[sea_orm(string_value = "obligation")]
    Obligation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Pictogram {
    pub id: i32,
    /// Regulatory code, e.g. `GHS02` or `M004`
    pub code: String,
    pub label: String,
    /// Image file name under the static asset directory
    pub image: String,
    pub kind: PictogramKind,
}

/// Catalog product, read-only for this application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i32,
    /// Canonical URL fragment
    pub slug: String,
    pub french_name: String,
    pub english_name: Option<String>,
    pub description: String,
    pub safety_instructions: String,
    pub updated_at: DateTime<Utc>,
    pub danger_pictograms: Vec<Pictogram>,
    pub obligation_pictograms: Vec<Pictogram>,
}

impl Product {
    /// Canonical detail URL: `/products/{slug}-{id}`
    pub fn path(&self) -> String {
        format!("/products/{}-{}", self.slug, self.id)
    }

    pub fn updated_on(&self) -> String {
        self.updated_at.format(DATE_FORMAT).to_string()
    }

    /// Attach pictograms, split by kind and ordered by code.
    pub fn with_pictograms(mut self, pictograms: impl IntoIterator<Item = Pictogram>) -> Self {
        let (mut danger, mut obligation): (Vec<_>, Vec<_>) = pictograms
            .into_iter()
            .partition(|p| p.kind == PictogramKind::Danger);
        danger.sort_by(|a, b| a.code.cmp(&b.code));
        obligation.sort_by(|a, b| a.code.cmp(&b.code));
        self.danger_pictograms = danger;
        self.obligation_pictograms = obligation;
        self
    }

    pub fn has_pictogram(&self, pictogram_id: i32) -> bool {
        self.danger_pictograms
            .iter()
            .chain(&self.obligation_pictograms)
            .any(|p| p.id == pictogram_id)
    }
}

/// Listing filter, valid for one request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductSearch {
    /// Case-insensitive substring of the French or English name
    pub name: Option<String>,
    /// Products must reference this pictogram
    pub pictogram: Option<i32>,
}

impl ProductSearch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.pictogram.is_none()
    }

    pub fn matches(&self, product: &Product) -> bool {
        let name_matches = self.name.as_ref().is_none_or(|needle| {
            let needle = needle.to_lowercase();
            product.french_name.to_lowercase().contains(&needle)
                || product
                    .english_name
                    .as_ref()
                    .is_some_and(|n| n.to_lowercase().contains(&needle))
        });
        let pictogram_matches = self.pictogram.is_none_or(|id| product.has_pictogram(id));
        name_matches && pictogram_matches
    }
}

/// Query string of the listing page
///
/// Empty parameters (as submitted by a blank search form) count as absent.
#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Page number, starting at 1
    #[serde(default, deserialize_with = "empty_as_none")]
    #[param(minimum = 1)]
    pub page: Option<i64>,

    /// Name filter
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(length(max = 100, message = "Le nom ne doit pas dépasser 100 caractères."))]
    pub name: Option<String>,

    /// Pictogram id filter
    #[serde(default, deserialize_with = "empty_as_none")]
    pub pictogram: Option<i32>,
}

impl ListQuery {
    /// Requested page; values below 1 are read as 1.
    pub fn page(&self) -> u64 {
        self.page.map_or(1, |p| p.max(1) as u64)
    }

    pub fn search(&self) -> ProductSearch {
        ProductSearch {
            name: self
                .name
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_string),
            pictogram: self.pictogram,
        }
    }
}

fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// One page of search results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductPage {
    pub items: Vec<Product>,
    /// Current page, starting at 1
    pub page: u64,
    pub per_page: u64,
    /// Number of products matching the search
    pub total: u64,
}

impl ProductPage {
    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.per_page).max(1)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }
}
