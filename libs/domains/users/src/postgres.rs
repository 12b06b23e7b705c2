use async_trait::async_trait;
use database::postgres::contains_pattern;
use sea_orm::sea_query::{Expr, ExprTrait, Func};
use sea_orm::{Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Select};

use crate::{
    entity::{self, Column},
    error::UserResult,
    models::{SortOrder, User, UserSearch},
    repository::UserRepository,
};

/// PostgreSQL implementation of UserRepository using SeaORM
#[derive(Clone)]
pub struct PostgresUserRepository {
    db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// `lower(column) LIKE '%needle%'` for each non-empty filter
fn search_condition(search: &UserSearch) -> Condition {
    [
        (Column::Username, &search.username),
        (Column::Name, &search.name),
        (Column::FamilyName, &search.family_name),
    ]
    .into_iter()
    .filter_map(|(column, needle)| needle.as_ref().map(|n| (column, n)))
    .fold(Condition::all(), |condition, (column, needle)| {
        let pattern = contains_pattern(needle);
        condition.add(Expr::expr(Func::lower(Expr::col(column))).like(pattern))
    })
}

/// Unfiltered when the search has no text filter
fn find_users(search: &UserSearch) -> Select<entity::Entity> {
    let condition = search_condition(search);
    let query = entity::Entity::find();
    let query = if condition.is_empty() {
        query
    } else {
        query.filter(condition)
    };
    apply_order(query, search.trie)
}

fn apply_order(query: Select<entity::Entity>, trie: SortOrder) -> Select<entity::Entity> {
    match trie {
        SortOrder::Alphabetical => query.order_by_asc(Column::Username),
        SortOrder::ReverseAlphabetical => query.order_by_desc(Column::Username),
        SortOrder::MostRecent => query
            .order_by_desc(Column::RegisteredAt)
            .order_by_asc(Column::Id),
        SortOrder::LeastRecent => query
            .order_by_asc(Column::RegisteredAt)
            .order_by_asc(Column::Id),
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn search(&self, search: &UserSearch) -> UserResult<Vec<User>> {
        let models = find_users(search).all(&self.db).await?;

        tracing::debug!(count = models.len(), trie = ?search.trie, "Searched users");
        Ok(models.into_iter().map(User::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, QueryTrait};

    fn sql(search: &UserSearch) -> String {
        find_users(search)
            .build(DatabaseBackend::Postgres)
            .to_string()
    }

    #[test]
    fn test_blank_search_has_no_filter() {
        let statement = sql(&UserSearch::default());
        assert!(!statement.contains("WHERE"));
        assert!(statement.contains(r#""username" ASC"#));
    }

    #[test]
    fn test_filters_are_case_insensitive() {
        let search = UserSearch {
            family_name: Some("Du_pont".to_string()),
            trie: SortOrder::MostRecent,
            ..Default::default()
        };
        let statement = sql(&search);
        assert!(statement.contains(r#"LOWER("family_name") LIKE"#), "{}", statement);
        assert!(statement.contains("pont%"));
        assert!(statement.contains(r#""registered_at" DESC"#));
    }
}
