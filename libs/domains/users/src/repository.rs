use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::UserResult;
use crate::models::{SortOrder, User, UserSearch};

/// Repository trait for the user directory
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Users matching every filter of `search`, in its sort order
    async fn search(&self, search: &UserSearch) -> UserResult<Vec<User>>;
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<i32, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn insert(&self, user: User) {
        self.users.write().await.insert(user.id, user);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn search(&self, search: &UserSearch) -> UserResult<Vec<User>> {
        let users = self.users.read().await;

        let mut result: Vec<User> = users
            .values()
            .filter(|u| search.matches(u))
            .cloned()
            .collect();

        match search.trie {
            SortOrder::Alphabetical => result.sort_by(|a, b| a.username.cmp(&b.username)),
            SortOrder::ReverseAlphabetical => result.sort_by(|a, b| b.username.cmp(&a.username)),
            SortOrder::MostRecent => result.sort_by(|a, b| {
                b.registered_at
                    .cmp(&a.registered_at)
                    .then(a.id.cmp(&b.id))
            }),
            SortOrder::LeastRecent => result.sort_by(|a, b| {
                a.registered_at
                    .cmp(&b.registered_at)
                    .then(a.id.cmp(&b.id))
            }),
        }

        Ok(result)
    }
}
