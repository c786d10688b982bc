use anyhow::Result;
use sea_orm::{ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use super::setup_test_db;
use crate::{client, item, order, order_item};

fn unique_email() -> String {
    format!("crud_{}@example.com", Uuid::new_v4())
}

/// Test client CRUD operations
#[tokio::test]
async fn test_client_crud() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let email = unique_email();
    let created = client::create(&db, "Marcin", "Abacki", &email).await?;
    assert!(created.id > 0);

    let found = client::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found.as_ref(), Some(&created));

    let by_email = client::Entity::find()
        .filter(client::Column::Email.eq(email.clone()))
        .one(&db)
        .await?;
    assert_eq!(by_email.map(|c| c.id), Some(created.id));

    // Email is unique
    assert!(client::create(&db, "Other", "Person", &email).await.is_err());

    client::Entity::delete_by_id(created.id).exec(&db).await?;
    assert!(client::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}

/// Deleting a client detaches its orders instead of removing them
#[tokio::test]
async fn test_client_delete_keeps_orders() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let c = client::create(&db, "Tomasz", "Babacki", &unique_email()).await?;
    let o = order::create(&db, Some(c.id)).await?;

    let orders = c.find_related(order::Entity).all(&db).await?;
    assert_eq!(orders.len(), 1);

    client::Entity::delete_by_id(c.id).exec(&db).await?;
    let after = order::Entity::find_by_id(o.id).one(&db).await?.expect("order survives");
    assert_eq!(after.client_id, None);

    order::Entity::delete_by_id(o.id).exec(&db).await?;
    Ok(())
}

/// Items are related to orders through the join table, in insertion order
#[tokio::test]
async fn test_order_items_many_to_many() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let keyboard = item::create(&db, "Keyboard", 9900).await?;
    let mouse = item::create(&db, "Mouse", 2500).await?;
    let first = order::create(&db, None).await?;
    let second = order::create(&db, None).await?;

    order::add_item(&db, first.id, mouse.id).await?;
    order::add_item(&db, first.id, keyboard.id).await?;
    order::add_item(&db, second.id, mouse.id).await?;

    let rows = order_item::Entity::find()
        .filter(order_item::Column::OrderId.eq(first.id))
        .order_by_asc(order_item::Column::Id)
        .all(&db)
        .await?;
    let ids: Vec<i64> = rows.iter().map(|r| r.item_id).collect();
    assert_eq!(ids, vec![mouse.id, keyboard.id]);

    let related = second.find_related(item::Entity).all(&db).await?;
    assert_eq!(related, vec![mouse.clone()]);

    // Cascades remove the join rows
    order::Entity::delete_by_id(first.id).exec(&db).await?;
    order::Entity::delete_by_id(second.id).exec(&db).await?;
    let left = order_item::Entity::find()
        .filter(order_item::Column::ItemId.is_in([mouse.id, keyboard.id]))
        .all(&db)
        .await?;
    assert!(left.is_empty());

    item::Entity::delete_by_id(keyboard.id).exec(&db).await?;
    item::Entity::delete_by_id(mouse.id).exec(&db).await?;
    Ok(())
}
