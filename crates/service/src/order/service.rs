use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::Order;
use super::repository::OrderRepository;
use crate::errors::ServiceError;

/// Order operations. Orders reference clients and items; they never own them.
pub struct OrderService<R: OrderRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: OrderRepository + ?Sized> OrderService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i64) -> Result<Order, ServiceError> {
        self.repo.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found("Order"))
    }

    pub async fn get_orders(&self) -> Result<Vec<Order>, ServiceError> {
        self.repo.find_all().await
    }

    pub async fn find_orders_by_client(&self, client_id: i64) -> Result<Vec<Order>, ServiceError> {
        self.repo.find_by_client(client_id).await
    }

    /// Start a new, empty order, optionally already bound to a client.
    #[instrument(skip(self))]
    pub async fn create(&self, client_id: Option<i64>) -> Result<Order, ServiceError> {
        let order = self.repo.create(client_id).await?;
        info!(order_id = order.id, "order_created");
        Ok(order)
    }

    #[instrument(skip(self))]
    pub async fn assign_client(&self, order_id: i64, client_id: i64) -> Result<Order, ServiceError> {
        self.repo
            .set_client(order_id, client_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Order"))
    }

    #[instrument(skip(self))]
    pub async fn add_item(&self, order_id: i64, item_id: i64) -> Result<Order, ServiceError> {
        self.repo
            .add_item(order_id, item_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Order"))
    }

    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        self.repo.delete_by_id(id).await
    }
}
