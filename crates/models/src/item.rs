use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::errors;

/// A product that can be put into any number of orders.
#[derive(Clone, Debug, PartialEq, Eq, Hash, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    /// Price in minor currency units.
    pub price_cents: i64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate(name: &str, price_cents: i64) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() { return Err(errors::ModelError::Validation("name required".into())); }
    if price_cents < 0 { return Err(errors::ModelError::Validation("price_cents must be >= 0".into())); }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, name: &str, price_cents: i64) -> Result<Model, errors::ModelError> {
    validate(name, price_cents)?;
    let am = ActiveModel {
        name: Set(name.to_string()),
        price_cents: Set(price_cents),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
