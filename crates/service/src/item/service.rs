use std::collections::HashSet;
use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{Item, NewItem};
use super::repository::ItemRepository;
use crate::errors::ServiceError;

pub struct ItemService<R: ItemRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: ItemRepository + ?Sized> ItemService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i64) -> Result<Item, ServiceError> {
        self.repo.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found("Item"))
    }

    pub async fn get_items(&self) -> Result<HashSet<Item>, ServiceError> {
        self.repo.find_all().await
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: NewItem) -> Result<Item, ServiceError> {
        models::item::validate(&input.name, input.price_cents)?;
        let item = self.repo.save(input).await?;
        info!(item_id = item.id, "item_created");
        Ok(item)
    }

    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        self.repo.delete_by_id(id).await
    }
}
