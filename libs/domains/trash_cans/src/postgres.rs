use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};

use crate::{
    entity,
    error::TrashCanResult,
    models::{NewTrashCan, TrashCan},
    repository::TrashCanRepository,
};

pub struct PgTrashCanRepository {
    db: DatabaseConnection,
}

impl PgTrashCanRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TrashCanRepository for PgTrashCanRepository {
    async fn create(&self, input: NewTrashCan) -> TrashCanResult<TrashCan> {
        let active_model: entity::ActiveModel = input.into();

        let model = active_model.insert(&self.db).await?;

        tracing::info!(trash_can_id = model.id, "Created trash can");
        Ok(model.into())
    }

    async fn list(&self) -> TrashCanResult<Vec<TrashCan>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Name)
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }
}
