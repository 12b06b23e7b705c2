//! Postgres integration tests for the product repository
//!
//! Run against a throwaway container seeded by the workspace migrations:
//!
//! ```sh
//! cargo test -p domain_products --test integration_test -- --ignored
//! ```

use domain_products::*;
use test_utils::TestDatabase;
use test_utils::assertions::assert_some;

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_by_id_loads_pictograms_by_kind() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    let acetone = assert_some(repo.find_by_id(1).await.unwrap(), "seeded acetone");

    assert_eq!(acetone.slug, "acetone");
    assert_eq!(acetone.updated_on(), "10/01/2024");
    let danger: Vec<_> = acetone.danger_pictograms.iter().map(|p| p.code.as_str()).collect();
    let obligation: Vec<_> = acetone
        .obligation_pictograms
        .iter()
        .map(|p| p.code.as_str())
        .collect();
    assert_eq!(danger, ["GHS02", "GHS07"]);
    assert_eq!(obligation, ["M004"]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_search_pages_by_ten() {
    let db = TestDatabase::new().await;
    let service = ProductService::new(PgProductRepository::new(db.connection()));

    let first = service.list_products(&ProductSearch::default(), 1).await.unwrap();
    let second = service.list_products(&ProductSearch::default(), 2).await.unwrap();
    let beyond = service.list_products(&ProductSearch::default(), 5).await.unwrap();

    assert_eq!(first.total, 12);
    assert_eq!(first.items.len(), 10);
    assert_eq!(second.items.len(), 2);
    assert!(beyond.items.is_empty());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_search_by_name_is_case_insensitive() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    let search = ProductSearch {
        name: Some("ACIDE".to_string()),
        pictogram: None,
    };
    let (items, total) = repo.search(&search, 1, PAGE_SIZE).await.unwrap();

    assert_eq!(total, 2);
    let slugs: Vec<_> = items.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, ["acide-chlorhydrique", "acide-sulfurique"]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_search_by_pictogram() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    // GHS03 (comburant) is only on hydrogen peroxide
    let search = ProductSearch {
        name: None,
        pictogram: Some(3),
    };
    let (items, total) = repo.search(&search, 1, PAGE_SIZE).await.unwrap();

    assert_eq!(total, 1);
    assert_eq!(items[0].id, 8);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_list_pictograms_ordered_by_code() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    let pictograms = repo.list_pictograms().await.unwrap();

    assert_eq!(pictograms.len(), 12);
    assert_eq!(pictograms[0].code, "GHS01");
    assert_eq!(pictograms[11].code, "M017");
}
