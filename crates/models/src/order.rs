use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::{client, errors, item, order_item};

/// Order header. Items live in `order_item`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "db_order")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub client_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Client,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Client => Entity::belongs_to(client::Entity)
                .from(Column::ClientId)
                .to(client::Column::Id)
                .into(),
        }
    }
}

impl Related<client::Entity> for Entity {
    fn to() -> RelationDef { Relation::Client.def() }
}

impl Related<item::Entity> for Entity {
    fn to() -> RelationDef { order_item::Relation::Item.def() }
    fn via() -> Option<RelationDef> { Some(order_item::Relation::Order.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(db: &DatabaseConnection, client_id: Option<i64>) -> Result<Model, errors::ModelError> {
    let am = ActiveModel { client_id: Set(client_id), ..Default::default() };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Append `item_id` to the order; repeated items get their own row.
pub async fn add_item(db: &DatabaseConnection, order_id: i64, item_id: i64) -> Result<order_item::Model, errors::ModelError> {
    let am = order_item::ActiveModel {
        order_id: Set(order_id),
        item_id: Set(item_id),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
