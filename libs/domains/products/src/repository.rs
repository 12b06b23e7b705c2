use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::{Pictogram, Product, ProductSearch};

/// Read access to the product catalog
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Get a product with its pictograms
    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// One page of products matching `search`, ordered by French name then id,
    /// plus the total number of matches. `page` starts at 1.
    async fn search(
        &self,
        search: &ProductSearch,
        page: u64,
        per_page: u64,
    ) -> ProductResult<(Vec<Product>, u64)>;

    /// All pictograms ordered by code, for the search form
    async fn list_pictograms(&self) -> ProductResult<Vec<Pictogram>>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<i32, Product>>>,
    pictograms: Arc<RwLock<HashMap<i32, Pictogram>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a product; its pictograms become available to the search form.
    pub async fn insert(&self, product: Product) {
        let mut pictograms = self.pictograms.write().await;
        for pictogram in product
            .danger_pictograms
            .iter()
            .chain(&product.obligation_pictograms)
        {
            pictograms.insert(pictogram.id, pictogram.clone());
        }
        self.products.write().await.insert(product.id, product);
    }

    pub async fn insert_pictogram(&self, pictogram: Pictogram) {
        self.pictograms.write().await.insert(pictogram.id, pictogram);
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn search(
        &self,
        search: &ProductSearch,
        page: u64,
        per_page: u64,
    ) -> ProductResult<(Vec<Product>, u64)> {
        let products = self.products.read().await;

        let mut matches: Vec<&Product> = products.values().filter(|p| search.matches(p)).collect();
        matches.sort_by(|a, b| a.french_name.cmp(&b.french_name).then(a.id.cmp(&b.id)));

        let total = matches.len() as u64;
        let offset = page.saturating_sub(1).saturating_mul(per_page);
        let items = matches
            .into_iter()
            .skip(offset as usize)
            .take(per_page as usize)
            .cloned()
            .collect();

        Ok((items, total))
    }

    async fn list_pictograms(&self) -> ProductResult<Vec<Pictogram>> {
        let pictograms = self.pictograms.read().await;
        let mut result: Vec<Pictogram> = pictograms.values().cloned().collect();
        result.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PictogramKind;
    use chrono::Utc;

    fn product(id: i32, french_name: &str) -> Product {
        Product {
            id,
            slug: french_name.to_lowercase(),
            french_name: french_name.to_string(),
            english_name: None,
            description: String::new(),
            safety_instructions: String::new(),
            updated_at: Utc::now(),
            danger_pictograms: vec![],
            obligation_pictograms: vec![],
        }
    }

    async fn repository_with(count: i32) -> InMemoryProductRepository {
        let repo = InMemoryProductRepository::new();
        for id in 1..=count {
            repo.insert(product(id, &format!("Produit {:02}", id))).await;
        }
        repo
    }

    #[tokio::test]
    async fn test_search_paginates_in_name_order() {
        let repo = repository_with(12).await;

        let (first, total) = repo.search(&ProductSearch::default(), 1, 10).await.unwrap();
        let (second, _) = repo.search(&ProductSearch::default(), 2, 10).await.unwrap();

        assert_eq!(total, 12);
        assert_eq!(first.len(), 10);
        assert_eq!(first[0].french_name, "Produit 01");
        assert_eq!(second.len(), 2);
        assert_eq!(second[1].id, 12);
    }

    #[tokio::test]
    async fn test_search_out_of_range_page_is_empty() {
        let repo = repository_with(3).await;
        let (items, total) = repo.search(&ProductSearch::default(), 5, 10).await.unwrap();
        assert!(items.is_empty());
        assert_eq!(total, 3);
    }

    #[tokio::test]
    async fn test_search_orders_ties_by_id() {
        let repo = InMemoryProductRepository::new();
        repo.insert(product(5, "Éthanol")).await;
        repo.insert(product(2, "Éthanol")).await;

        let (items, _) = repo.search(&ProductSearch::default(), 1, 10).await.unwrap();
        let ids: Vec<_> = items.iter().map(|p| p.id).collect();
        assert_eq!(ids, [2, 5]);
    }

    #[tokio::test]
    async fn test_inserted_product_pictograms_are_listed() {
        let repo = InMemoryProductRepository::new();
        let flame = Pictogram {
            id: 2,
            code: "GHS02".to_string(),
            label: "Inflammable".to_string(),
            image: "ghs02.svg".to_string(),
            kind: PictogramKind::Danger,
        };
        repo.insert(product(1, "Acétone").with_pictograms([flame.clone()]))
            .await;

        assert_eq!(repo.list_pictograms().await.unwrap(), vec![flame]);
        assert!(repo.find_by_id(1).await.unwrap().is_some());
        assert!(repo.find_by_id(2).await.unwrap().is_none());
    }
}
