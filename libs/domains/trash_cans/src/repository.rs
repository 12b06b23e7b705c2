use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::TrashCanResult;
use crate::models::{NewTrashCan, TrashCan};

/// Repository trait for TrashCan persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrashCanRepository: Send + Sync {
    /// Create a new trash can
    async fn create(&self, input: NewTrashCan) -> TrashCanResult<TrashCan>;

    /// All trash cans ordered by name
    async fn list(&self) -> TrashCanResult<Vec<TrashCan>>;
}

/// In-memory implementation of TrashCanRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryTrashCanRepository {
    trash_cans: Arc<RwLock<HashMap<i32, TrashCan>>>,
}

impl InMemoryTrashCanRepository {
    pub fn new() -> Self {
        Self {
            trash_cans: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl TrashCanRepository for InMemoryTrashCanRepository {
    async fn create(&self, input: NewTrashCan) -> TrashCanResult<TrashCan> {
        let mut trash_cans = self.trash_cans.write().await;

        let id = trash_cans.keys().max().copied().unwrap_or(0) + 1;
        let trash_can = TrashCan {
            id,
            name: input.name,
            color: input.color,
        };
        trash_cans.insert(id, trash_can.clone());

        tracing::info!(trash_can_id = id, "Created trash can");
        Ok(trash_can)
    }

    async fn list(&self) -> TrashCanResult<Vec<TrashCan>> {
        let trash_cans = self.trash_cans.read().await;

        let mut result: Vec<TrashCan> = trash_cans.values().cloned().collect();
        result.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new(name: &str) -> NewTrashCan {
        NewTrashCan {
            name: name.to_string(),
            color: "#000000".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = InMemoryTrashCanRepository::new();
        let first = repo.create(new("Verre")).await.unwrap();
        let second = repo.create(new("Papier")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_list_orders_by_name() {
        let repo = InMemoryTrashCanRepository::new();
        repo.create(new("Verre")).await.unwrap();
        repo.create(new("Emballages")).await.unwrap();

        let names: Vec<_> = repo.list().await.unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, ["Emballages", "Verre"]);
    }
}
