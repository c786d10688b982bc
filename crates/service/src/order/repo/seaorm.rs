use std::collections::HashMap;

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set};

use models::{client, item, order, order_item};
use crate::errors::ServiceError;
use crate::order::domain::Order;
use crate::order::repository::OrderRepository;

pub struct SeaOrmOrderRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    /// Resolve items for a batch of order headers with two queries.
    async fn with_items(&self, headers: Vec<order::Model>) -> Result<Vec<Order>, ServiceError> {
        if headers.is_empty() {
            return Ok(Vec::new());
        }
        let order_ids: Vec<i64> = headers.iter().map(|o| o.id).collect();
        let links = order_item::Entity::find()
            .filter(order_item::Column::OrderId.is_in(order_ids))
            .order_by_asc(order_item::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)?;

        let mut item_ids: Vec<i64> = links.iter().map(|l| l.item_id).collect();
        item_ids.sort_unstable();
        item_ids.dedup();
        let items: HashMap<i64, item::Model> = if item_ids.is_empty() {
            HashMap::new()
        } else {
            item::Entity::find()
                .filter(item::Column::Id.is_in(item_ids))
                .all(&self.db)
                .await
                .map_err(ServiceError::db)?
                .into_iter()
                .map(|i| (i.id, i))
                .collect()
        };

        let mut by_order: HashMap<i64, Vec<item::Model>> = HashMap::new();
        for link in links {
            if let Some(it) = items.get(&link.item_id) {
                by_order.entry(link.order_id).or_default().push(it.clone());
            }
        }

        Ok(headers
            .into_iter()
            .map(|h| Order { id: h.id, client_id: h.client_id, items: by_order.remove(&h.id).unwrap_or_default() })
            .collect())
    }

    async fn header(&self, id: i64) -> Result<Option<order::Model>, ServiceError> {
        order::Entity::find_by_id(id).one(&self.db).await.map_err(ServiceError::db)
    }

    async fn ensure_client(&self, client_id: i64) -> Result<(), ServiceError> {
        client::Entity::find_by_id(client_id)
            .one(&self.db)
            .await
            .map_err(ServiceError::db)?
            .map(|_| ())
            .ok_or_else(|| ServiceError::not_found("Client"))
    }
}

#[async_trait::async_trait]
impl OrderRepository for SeaOrmOrderRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, ServiceError> {
        match self.header(id).await? {
            Some(h) => Ok(self.with_items(vec![h]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<Order>, ServiceError> {
        let headers = order::Entity::find()
            .order_by_asc(order::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)?;
        self.with_items(headers).await
    }

    async fn find_by_client(&self, client_id: i64) -> Result<Vec<Order>, ServiceError> {
        let headers = order::Entity::find()
            .filter(order::Column::ClientId.eq(client_id))
            .order_by_asc(order::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)?;
        self.with_items(headers).await
    }

    async fn create(&self, client_id: Option<i64>) -> Result<Order, ServiceError> {
        if let Some(cid) = client_id {
            self.ensure_client(cid).await?;
        }
        let header = order::create(&self.db, client_id).await?;
        Ok(Order::new(header.id, header.client_id))
    }

    async fn set_client(&self, order_id: i64, client_id: i64) -> Result<Option<Order>, ServiceError> {
        let Some(header) = self.header(order_id).await? else { return Ok(None) };
        self.ensure_client(client_id).await?;
        let mut am = header.into_active_model();
        am.client_id = Set(Some(client_id));
        am.update(&self.db).await.map_err(ServiceError::db)?;
        self.find_by_id(order_id).await
    }

    async fn add_item(&self, order_id: i64, item_id: i64) -> Result<Option<Order>, ServiceError> {
        if self.header(order_id).await?.is_none() {
            return Ok(None);
        }
        let exists = item::Entity::find_by_id(item_id).one(&self.db).await.map_err(ServiceError::db)?;
        if exists.is_none() {
            return Err(ServiceError::not_found("Item"));
        }
        order::add_item(&self.db, order_id, item_id).await?;
        self.find_by_id(order_id).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        order::Entity::delete_by_id(id).exec(&self.db).await.map_err(ServiceError::db)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use uuid::Uuid;

    #[tokio::test]
    async fn order_repository_resolves_items() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let repo = SeaOrmOrderRepository::new(db.clone());

        let c = client::create(&db, "Marcin", "Abacki", &format!("order_{}@example.com", Uuid::new_v4())).await?;
        let pen = item::create(&db, "Pen", 300).await?;
        let ink = item::create(&db, "Ink", 700).await?;

        let created = repo.create(None).await?;
        assert!(created.items.is_empty());
        assert_eq!(created.client_id, None);

        repo.add_item(created.id, ink.id).await?;
        let order = repo.add_item(created.id, pen.id).await?.expect("order exists");
        assert_eq!(order.items, vec![ink.clone(), pen.clone()]);

        let assigned = repo.set_client(created.id, c.id).await?.expect("order exists");
        assert_eq!(assigned.client_id, Some(c.id));
        assert_eq!(repo.find_by_client(c.id).await?.len(), 1);

        let missing_item = repo.add_item(created.id, -1).await.unwrap_err();
        assert_eq!(missing_item.to_string(), "Item not found");
        assert!(repo.set_client(-1, c.id).await?.is_none());

        repo.delete_by_id(created.id).await?;
        assert!(repo.find_by_id(created.id).await?.is_none());
        item::Entity::delete_by_id(pen.id).exec(&db).await?;
        item::Entity::delete_by_id(ink.id).exec(&db).await?;
        client::Entity::delete_by_id(c.id).exec(&db).await?;
        Ok(())
    }
}
