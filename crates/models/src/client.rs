use sea_orm::{entity::prelude::*, Set, DatabaseConnection, SqlErr};
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::order;

/// Message for an insert or update that reuses a registered email.
pub const DUPLICATE_EMAIL: &str = "email already registered";

#[derive(Clone, Debug, PartialEq, Eq, Hash, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "client")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub surname: String,
    #[sea_orm(unique)]
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Order,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Order => Entity::has_many(order::Entity).into() }
    }
}

impl Related<order::Entity> for Entity {
    fn to() -> RelationDef { Relation::Order.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() { return Err(errors::ModelError::Validation("name required".into())); }
    Ok(())
}

pub fn validate_surname(surname: &str) -> Result<(), errors::ModelError> {
    if surname.trim().is_empty() { return Err(errors::ModelError::Validation("surname required".into())); }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), errors::ModelError> {
    if !email.contains('@') { return Err(errors::ModelError::Validation("invalid email".into())); }
    Ok(())
}

pub fn validate(name: &str, surname: &str, email: &str) -> Result<(), errors::ModelError> {
    validate_name(name)?;
    validate_surname(surname)?;
    validate_email(email)
}

/// Insert a client; the id is assigned by the database.
pub async fn create(db: &DatabaseConnection, name: &str, surname: &str, email: &str) -> Result<Model, errors::ModelError> {
    validate(name, surname, email)?;
    let am = ActiveModel {
        name: Set(name.to_string()),
        surname: Set(surname.to_string()),
        email: Set(email.to_string()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => errors::ModelError::Conflict(DUPLICATE_EMAIL.to_string()),
        _ => errors::ModelError::Db(e.to_string()),
    })
}
