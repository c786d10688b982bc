use std::collections::HashSet;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use super::domain::{Item, NewItem};
use crate::errors::ServiceError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, ServiceError>;
    async fn find_all(&self) -> Result<HashSet<Item>, ServiceError>;
    async fn save(&self, item: NewItem) -> Result<Item, ServiceError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError>;
}

pub mod memory {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct InMemoryItemRepository {
        items: Mutex<BTreeMap<i64, Item>>,
        next_id: Mutex<i64>,
    }

    impl InMemoryItemRepository {
        /// Snapshot lookup used by the in-memory order repository.
        pub fn get(&self, id: i64) -> Option<Item> {
            self.items.lock().unwrap().get(&id).cloned()
        }
    }

    #[async_trait]
    impl ItemRepository for InMemoryItemRepository {
        async fn find_by_id(&self, id: i64) -> Result<Option<Item>, ServiceError> {
            Ok(self.get(id))
        }

        async fn find_all(&self) -> Result<HashSet<Item>, ServiceError> {
            Ok(self.items.lock().unwrap().values().cloned().collect())
        }

        async fn save(&self, item: NewItem) -> Result<Item, ServiceError> {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            let saved = Item { id: *next_id, name: item.name, price_cents: item.price_cents };
            self.items.lock().unwrap().insert(saved.id, saved.clone());
            Ok(saved)
        }

        async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
            self.items.lock().unwrap().remove(&id);
            Ok(())
        }
    }
}
