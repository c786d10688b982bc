use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::client::{repo::SeaOrmClientRepository, repository::memory::InMemoryClientRepository, ClientRepository, ClientService};
use service::item::{repo::SeaOrmItemRepository, repository::memory::InMemoryItemRepository, ItemRepository, ItemService};
use service::order::{repo::SeaOrmOrderRepository, repository::memory::InMemoryOrderRepository, OrderRepository, OrderService};

/// Services shared by all handlers.
#[derive(Clone)]
pub struct ServerState {
    pub clients: Arc<ClientService<dyn ClientRepository>>,
    pub items: Arc<ItemService<dyn ItemRepository>>,
    pub orders: Arc<OrderService<dyn OrderRepository>>,
}

impl ServerState {
    pub fn new(
        clients: Arc<dyn ClientRepository>,
        items: Arc<dyn ItemRepository>,
        orders: Arc<dyn OrderRepository>,
    ) -> Self {
        Self {
            clients: Arc::new(ClientService::new(clients)),
            items: Arc::new(ItemService::new(items)),
            orders: Arc::new(OrderService::new(orders)),
        }
    }

    /// SeaORM repositories sharing one pool.
    pub fn with_database(db: DatabaseConnection) -> Self {
        Self::new(
            Arc::new(SeaOrmClientRepository::new(db.clone())),
            Arc::new(SeaOrmItemRepository::new(db.clone())),
            Arc::new(SeaOrmOrderRepository::new(db)),
        )
    }

    /// Process-local repositories, used by tests and demos.
    pub fn in_memory() -> Self {
        let clients = Arc::new(InMemoryClientRepository::default());
        let items = Arc::new(InMemoryItemRepository::default());
        let orders = Arc::new(InMemoryOrderRepository::new(clients.clone(), items.clone()));
        Self::new(clients, items, orders)
    }
}
