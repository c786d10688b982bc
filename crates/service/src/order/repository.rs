use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use super::domain::Order;
use crate::errors::ServiceError;

/// Repository abstraction for orders.
///
/// `set_client` and `add_item` return `Ok(None)` when the order does not exist
/// and `NotFound` when the referenced client or item does not.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<Order>, ServiceError>;
    async fn find_by_client(&self, client_id: i64) -> Result<Vec<Order>, ServiceError>;
    async fn create(&self, client_id: Option<i64>) -> Result<Order, ServiceError>;
    async fn set_client(&self, order_id: i64, client_id: i64) -> Result<Option<Order>, ServiceError>;
    async fn add_item(&self, order_id: i64, item_id: i64) -> Result<Option<Order>, ServiceError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError>;
}

pub mod memory {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Arc, Mutex};

    use crate::client::repository::{memory::InMemoryClientRepository, ClientRepository};
    use crate::item::repository::memory::InMemoryItemRepository;

    #[derive(Clone, Default)]
    struct OrderRow {
        client_id: Option<i64>,
        item_ids: Vec<i64>,
    }

    /// Orders kept in memory; client and item references are resolved
    /// against the sibling in-memory repositories on every read.
    pub struct InMemoryOrderRepository {
        clients: Arc<InMemoryClientRepository>,
        items: Arc<InMemoryItemRepository>,
        orders: Mutex<BTreeMap<i64, OrderRow>>,
        next_id: Mutex<i64>,
    }

    impl InMemoryOrderRepository {
        pub fn new(clients: Arc<InMemoryClientRepository>, items: Arc<InMemoryItemRepository>) -> Self {
            Self { clients, items, orders: Mutex::new(BTreeMap::new()), next_id: Mutex::new(0) }
        }

        async fn resolve(&self, id: i64, row: OrderRow) -> Result<Order, ServiceError> {
            // Deleted clients detach, deleted items drop out
            let client_id = match row.client_id {
                Some(cid) if self.clients.find_by_id(cid).await?.is_some() => Some(cid),
                _ => None,
            };
            let items = row.item_ids.iter().filter_map(|iid| self.items.get(*iid)).collect();
            Ok(Order { id, client_id, items })
        }

        fn row(&self, id: i64) -> Option<OrderRow> {
            self.orders.lock().unwrap().get(&id).cloned()
        }

        fn rows(&self) -> Vec<(i64, OrderRow)> {
            self.orders.lock().unwrap().iter().map(|(id, r)| (*id, r.clone())).collect()
        }

        async fn ensure_client(&self, client_id: i64) -> Result<(), ServiceError> {
            match self.clients.find_by_id(client_id).await? {
                Some(_) => Ok(()),
                None => Err(ServiceError::not_found("Client")),
            }
        }
    }

    #[async_trait]
    impl OrderRepository for InMemoryOrderRepository {
        async fn find_by_id(&self, id: i64) -> Result<Option<Order>, ServiceError> {
            match self.row(id) {
                Some(row) => Ok(Some(self.resolve(id, row).await?)),
                None => Ok(None),
            }
        }

        async fn find_all(&self) -> Result<Vec<Order>, ServiceError> {
            let mut out = Vec::new();
            for (id, row) in self.rows() {
                out.push(self.resolve(id, row).await?);
            }
            Ok(out)
        }

        async fn find_by_client(&self, client_id: i64) -> Result<Vec<Order>, ServiceError> {
            let all = self.find_all().await?;
            Ok(all.into_iter().filter(|o| o.client_id == Some(client_id)).collect())
        }

        async fn create(&self, client_id: Option<i64>) -> Result<Order, ServiceError> {
            if let Some(cid) = client_id {
                self.ensure_client(cid).await?;
            }
            let id = {
                let mut next_id = self.next_id.lock().unwrap();
                *next_id += 1;
                *next_id
            };
            self.orders.lock().unwrap().insert(id, OrderRow { client_id, item_ids: Vec::new() });
            Ok(Order::new(id, client_id))
        }

        async fn set_client(&self, order_id: i64, client_id: i64) -> Result<Option<Order>, ServiceError> {
            if self.row(order_id).is_none() {
                return Ok(None);
            }
            self.ensure_client(client_id).await?;
            if let Some(row) = self.orders.lock().unwrap().get_mut(&order_id) {
                row.client_id = Some(client_id);
            }
            self.find_by_id(order_id).await
        }

        async fn add_item(&self, order_id: i64, item_id: i64) -> Result<Option<Order>, ServiceError> {
            if self.row(order_id).is_none() {
                return Ok(None);
            }
            if self.items.get(item_id).is_none() {
                return Err(ServiceError::not_found("Item"));
            }
            if let Some(row) = self.orders.lock().unwrap().get_mut(&order_id) {
                row.item_ids.push(item_id);
            }
            self.find_by_id(order_id).await
        }

        async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
            self.orders.lock().unwrap().remove(&id);
            Ok(())
        }
    }

}
