use async_trait::async_trait;
use database::postgres::contains_pattern;
use sea_orm::sea_query::{Condition, Expr, Func, Query};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::{
    entity::{pictogram, product, product_pictogram},
    error::ProductResult,
    models::{Pictogram, Product, ProductSearch},
    repository::ProductRepository,
};

pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Load the pictograms of every product in one round trip per table.
    async fn with_pictograms(&self, models: Vec<product::Model>) -> ProductResult<Vec<Product>> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let product_ids: Vec<i32> = models.iter().map(|m| m.id).collect();
        let links = product_pictogram::Entity::find()
            .filter(product_pictogram::Column::ProductId.is_in(product_ids))
            .all(&self.db)
            .await?;

        let mut pictogram_ids: Vec<i32> = links.iter().map(|l| l.pictogram_id).collect();
        pictogram_ids.sort_unstable();
        pictogram_ids.dedup();

        let pictograms: HashMap<i32, Pictogram> = if pictogram_ids.is_empty() {
            HashMap::new()
        } else {
            pictogram::Entity::find()
                .filter(pictogram::Column::Id.is_in(pictogram_ids))
                .all(&self.db)
                .await?
                .into_iter()
                .map(|m| (m.id, Pictogram::from(m)))
                .collect()
        };

        let mut by_product: HashMap<i32, Vec<Pictogram>> = HashMap::new();
        for link in links {
            if let Some(pictogram) = pictograms.get(&link.pictogram_id) {
                by_product
                    .entry(link.product_id)
                    .or_default()
                    .push(pictogram.clone());
            }
        }

        Ok(models
            .into_iter()
            .map(|model| {
                let pictograms = by_product.remove(&model.id).unwrap_or_default();
                Product::from(model).with_pictograms(pictograms)
            })
            .collect())
    }
}

fn search_condition(search: &ProductSearch) -> Condition {
    let mut condition = Condition::all();

    if let Some(name) = &search.name {
        let pattern = contains_pattern(name);
        condition = condition.add(
            Condition::any()
                .add(lower_like(product::Column::FrenchName, &pattern))
                .add(lower_like(product::Column::EnglishName, &pattern)),
        );
    }

    if let Some(pictogram_id) = search.pictogram {
        condition = condition.add(
            product::Column::Id.in_subquery(
                Query::select()
                    .column(product_pictogram::Column::ProductId)
                    .from(product_pictogram::Entity)
                    .and_where(product_pictogram::Column::PictogramId.eq(pictogram_id))
                    .to_owned(),
            ),
        );
    }

    condition
}

/// `lower(column) LIKE pattern`
fn lower_like(column: product::Column, pattern: &str) -> Condition {
    use sea_orm::sea_query::ExprTrait;

    Condition::all().add(Expr::expr(Func::lower(Expr::col(column))).like(pattern))
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = product::Entity::find_by_id(id)
            .one(&self.db)
            .await?;

        match model {
            Some(model) => Ok(self.with_pictograms(vec![model]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn search(
        &self,
        search: &ProductSearch,
        page: u64,
        per_page: u64,
    ) -> ProductResult<(Vec<Product>, u64)> {
        let paginator = product::Entity::find()
            .filter(search_condition(search))
            .order_by_asc(product::Column::FrenchName)
            .order_by_asc(product::Column::Id)
            .paginate(&self.db, per_page);

        let total = paginator.num_items().await?;

        // Past the last page, including offsets too large for u64
        let offset = page.saturating_sub(1).checked_mul(per_page);
        if offset.is_none_or(|offset| offset >= total) {
            tracing::debug!(page, total, "Page past the end of the results");
            return Ok((Vec::new(), total));
        }

        let models = paginator.fetch_page(page.saturating_sub(1)).await?;

        tracing::debug!(page, total, returned = models.len(), "Searched products");
        Ok((self.with_pictograms(models).await?, total))
    }

    async fn list_pictograms(&self) -> ProductResult<Vec<Pictogram>> {
        let models = pictogram::Entity::find()
            .order_by_asc(pictogram::Column::Code)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Pictogram::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PictogramKind;
    use chrono::{FixedOffset, TimeZone};
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn acetone_model() -> product::Model {
        product::Model {
            id: 1,
            slug: "acetone".to_string(),
            french_name: "Acétone".to_string(),
            english_name: Some("Acetone".to_string()),
            description: "Solvant".to_string(),
            safety_instructions: "Aérer".to_string(),
            updated_at: FixedOffset::east_opt(0)
                .unwrap()
                .with_ymd_and_hms(2024, 1, 10, 0, 0, 0)
                .unwrap(),
        }
    }

    #[tokio::test]
    async fn test_find_by_id_attaches_pictograms() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![acetone_model()]])
            .append_query_results([vec![
                product_pictogram::Model {
                    product_id: 1,
                    pictogram_id: 2,
                },
                product_pictogram::Model {
                    product_id: 1,
                    pictogram_id: 9,
                },
            ]])
            .append_query_results([vec![
                pictogram::Model {
                    id: 2,
                    code: "GHS02".to_string(),
                    label: "Inflammable".to_string(),
                    image: "ghs02.svg".to_string(),
                    kind: PictogramKind::Danger,
                },
                pictogram::Model {
                    id: 9,
                    code: "M004".to_string(),
                    label: "Lunettes".to_string(),
                    image: "m004.svg".to_string(),
                    kind: PictogramKind::Obligation,
                },
            ]])
            .into_connection();

        let repo = PgProductRepository::new(db);
        let product = repo.find_by_id(1).await.unwrap().unwrap();

        assert_eq!(product.french_name, "Acétone");
        assert_eq!(product.updated_on(), "10/01/2024");
        assert_eq!(product.danger_pictograms[0].code, "GHS02");
        assert_eq!(product.obligation_pictograms[0].code, "M004");
    }

    fn count_row(count: i64) -> std::collections::BTreeMap<String, sea_orm::Value> {
        std::collections::BTreeMap::from([("num_items".to_string(), sea_orm::Value::BigInt(Some(count)))])
    }

    #[tokio::test]
    async fn test_search_huge_page_is_empty() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[count_row(12)]])
            .into_connection();

        let repo = PgProductRepository::new(db);
        let (items, total) = repo
            .search(&ProductSearch::default(), i64::MAX as u64, 10)
            .await
            .unwrap();

        assert!(items.is_empty());
        assert_eq!(total, 12);
    }

    #[tokio::test]
    async fn test_search_page_after_last_is_empty() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[count_row(12)]])
            .into_connection();

        let repo = PgProductRepository::new(db);
        let (items, total) = repo.search(&ProductSearch::default(), 3, 10).await.unwrap();

        assert!(items.is_empty());
        assert_eq!(total, 12);
    }

    #[tokio::test]
    async fn test_find_by_id_missing_product() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<product::Model>::new()])
            .into_connection();

        let repo = PgProductRepository::new(db);
        assert!(repo.find_by_id(99).await.unwrap().is_none());
    }
}
