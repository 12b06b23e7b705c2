use std::sync::Arc;
use tracing::instrument;

use crate::error::UserResult;
use crate::models::{User, UserSearch};
use crate::repository::UserRepository;

/// Service layer for the user directory
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Users matching a bound search
    #[instrument(skip(self))]
    pub async fn search_users(&self, search: &UserSearch) -> UserResult<Vec<User>> {
        self.repository.search(search).await
    }
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UserError;
    use crate::models::SortOrder;
    use crate::repository::MockUserRepository;
    use sea_orm::DbErr;

    #[tokio::test]
    async fn test_search_users_passes_search_through() {
        let mut mock = MockUserRepository::new();
        mock.expect_search()
            .withf(|search| search.trie == SortOrder::LeastRecent)
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = UserService::new(mock);
        let search = UserSearch {
            trie: SortOrder::LeastRecent,
            ..Default::default()
        };
        assert!(service.search_users(&search).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_users_propagates_errors() {
        let mut mock = MockUserRepository::new();
        mock.expect_search()
            .returning(|_| Err(UserError::Database(DbErr::Custom("connection reset".to_string()))));

        let service = UserService::new(mock);
        let result = service.search_users(&UserSearch::default()).await;
        assert!(matches!(result, Err(UserError::Database(_))));
    }
}
