use std::collections::HashSet;

use sea_orm::{DatabaseConnection, EntityTrait};

use models::item;
use crate::errors::ServiceError;
use crate::item::domain::{Item, NewItem};
use crate::item::repository::ItemRepository;

pub struct SeaOrmItemRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmItemRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl ItemRepository for SeaOrmItemRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, ServiceError> {
        item::Entity::find_by_id(id).one(&self.db).await.map_err(ServiceError::db)
    }

    async fn find_all(&self) -> Result<HashSet<Item>, ServiceError> {
        let rows = item::Entity::find().all(&self.db).await.map_err(ServiceError::db)?;
        Ok(rows.into_iter().collect())
    }

    async fn save(&self, input: NewItem) -> Result<Item, ServiceError> {
        Ok(item::create(&self.db, &input.name, input.price_cents).await?)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        item::Entity::delete_by_id(id).exec(&self.db).await.map_err(ServiceError::db)?;
        Ok(())
    }
}
