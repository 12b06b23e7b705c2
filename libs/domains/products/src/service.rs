use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{Pictogram, Product, ProductPage, ProductSearch, PAGE_SIZE};
use crate::repository::ProductRepository;
use crate::slug::ProductSegment;

/// Outcome of resolving a `{slug}-{id}` URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// The slug is canonical
    Product(Box<Product>),
    /// The slug is stale; the product lives at this detail URL
    Moved(String),
}

/// Service layer for the product catalog
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Look a product up from its URL segment and check the slug.
    #[instrument(skip(self), fields(product_id = segment.id))]
    pub async fn resolve(&self, segment: &ProductSegment) -> ProductResult<Resolved> {
        let product = self.get_product(segment.id).await?;

        if product.slug != segment.slug {
            tracing::debug!(
                requested = %segment.slug,
                canonical = %product.slug,
                "Stale product slug"
            );
            return Ok(Resolved::Moved(product.path()));
        }

        Ok(Resolved::Product(Box::new(product)))
    }

    /// One listing page. Pages past the end are empty, not errors.
    #[instrument(skip(self))]
    pub async fn list_products(&self, search: &ProductSearch, page: u64) -> ProductResult<ProductPage> {
        let page = page.max(1);
        let (items, total) = self.repository.search(search, page, PAGE_SIZE).await?;

        Ok(ProductPage {
            items,
            page,
            per_page: PAGE_SIZE,
            total,
        })
    }

    pub async fn list_pictograms(&self) -> ProductResult<Vec<Pictogram>> {
        self.repository.list_pictograms().await
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn product(id: i32, slug: &str) -> Product {
        Product {
            id,
            slug: slug.to_string(),
            french_name: "Acétone".to_string(),
            english_name: None,
            description: String::new(),
            safety_instructions: String::new(),
            updated_at: Utc::now(),
            danger_pictograms: vec![],
            obligation_pictograms: vec![],
        }
    }

    fn segment(slug: &str, id: i32) -> ProductSegment {
        ProductSegment {
            slug: slug.to_string(),
            id,
        }
    }

    #[tokio::test]
    async fn test_resolve_canonical_slug() {
        let mut mock = MockProductRepository::new();
        mock.expect_find_by_id()
            .with(eq(1))
            .returning(|id| Ok(Some(product(id, "acetone"))));

        let service = ProductService::new(mock);
        let resolved = service.resolve(&segment("acetone", 1)).await.unwrap();

        assert!(matches!(resolved, Resolved::Product(p) if p.id == 1));
    }

    #[tokio::test]
    async fn test_resolve_stale_slug_moves_to_detail_url() {
        let mut mock = MockProductRepository::new();
        mock.expect_find_by_id()
            .returning(|id| Ok(Some(product(id, "acetone"))));

        let service = ProductService::new(mock);
        let resolved = service.resolve(&segment("old-name", 1)).await.unwrap();

        assert_eq!(resolved, Resolved::Moved("/products/acetone-1".to_string()));
    }

    #[tokio::test]
    async fn test_resolve_unknown_product() {
        let mut mock = MockProductRepository::new();
        mock.expect_find_by_id().returning(|_| Ok(None));

        let service = ProductService::new(mock);
        let result = service.resolve(&segment("acetone", 404)).await;

        assert!(matches!(result, Err(ProductError::NotFound(404))));
    }

    #[tokio::test]
    async fn test_list_products_uses_fixed_page_size() {
        let mut mock = MockProductRepository::new();
        mock.expect_search()
            .withf(|_, page, per_page| *page == 3 && *per_page == PAGE_SIZE)
            .returning(|_, _, _| Ok((vec![], 25)));

        let service = ProductService::new(mock);
        let page = service.list_products(&ProductSearch::default(), 3).await.unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total, 25);
        assert_eq!(page.total_pages(), 3);
        assert!(!page.has_next());
    }

    #[tokio::test]
    async fn test_list_products_clamps_page_zero() {
        let mut mock = MockProductRepository::new();
        mock.expect_search()
            .withf(|_, page, _| *page == 1)
            .returning(|_, _, _| Ok((vec![], 0)));

        let service = ProductService::new(mock);
        let page = service.list_products(&ProductSearch::default(), 0).await.unwrap();
        assert_eq!(page.page, 1);
    }
}
