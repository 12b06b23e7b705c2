use std::sync::Arc;
use tracing::instrument;

use crate::error::TrashCanResult;
use crate::models::{NewTrashCan, TrashCan};
use crate::repository::TrashCanRepository;

/// Service layer for trash cans
pub struct TrashCanService<R: TrashCanRepository> {
    repository: Arc<R>,
}

impl<R: TrashCanRepository> TrashCanService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn create_trash_can(&self, input: NewTrashCan) -> TrashCanResult<TrashCan> {
        self.repository.create(input).await
    }

    pub async fn list_trash_cans(&self) -> TrashCanResult<Vec<TrashCan>> {
        self.repository.list().await
    }
}

impl<R: TrashCanRepository> Clone for TrashCanService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockTrashCanRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_create_delegates_to_repository() {
        let input = NewTrashCan {
            name: "Verre".to_string(),
            color: "#2e7d32".to_string(),
        };

        let mut mock = MockTrashCanRepository::new();
        mock.expect_create()
            .with(eq(input.clone()))
            .times(1)
            .returning(|input| {
                Ok(TrashCan {
                    id: 1,
                    name: input.name,
                    color: input.color,
                })
            });

        let service = TrashCanService::new(mock);
        let created = service.create_trash_can(input).await.unwrap();
        assert_eq!(created.id, 1);
    }
}
