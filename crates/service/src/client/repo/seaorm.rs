use std::collections::HashSet;

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter, Set};

use models::client;
use crate::client::domain::{Client, NewClient};
use crate::client::repository::ClientRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation.
pub struct SeaOrmClientRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmClientRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    async fn find_where(&self, col: client::Column, value: &str) -> Result<HashSet<Client>, ServiceError> {
        let rows = client::Entity::find()
            .filter(col.eq(value.to_string()))
            .all(&self.db)
            .await
            .map_err(ServiceError::db)?;
        Ok(rows.into_iter().collect())
    }
}

#[async_trait::async_trait]
impl ClientRepository for SeaOrmClientRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Client>, ServiceError> {
        client::Entity::find_by_id(id).one(&self.db).await.map_err(ServiceError::db)
    }

    async fn find_client_by_email(&self, email: &str) -> Result<Option<Client>, ServiceError> {
        client::Entity::find()
            .filter(client::Column::Email.eq(email.to_string()))
            .one(&self.db)
            .await
            .map_err(ServiceError::db)
    }

    async fn find_clients_by_name(&self, name: &str) -> Result<HashSet<Client>, ServiceError> {
        self.find_where(client::Column::Name, name).await
    }

    async fn find_clients_by_surname(&self, surname: &str) -> Result<HashSet<Client>, ServiceError> {
        self.find_where(client::Column::Surname, surname).await
    }

    async fn find_all(&self) -> Result<HashSet<Client>, ServiceError> {
        let rows = client::Entity::find().all(&self.db).await.map_err(ServiceError::db)?;
        Ok(rows.into_iter().collect())
    }

    async fn save(&self, input: NewClient) -> Result<Client, ServiceError> {
        Ok(client::create(&self.db, &input.name, &input.surname, &input.email).await?)
    }

    async fn update(&self, updated: Client) -> Result<Client, ServiceError> {
        let mut am = updated.clone().into_active_model();
        am.name = Set(updated.name);
        am.surname = Set(updated.surname);
        am.email = Set(updated.email);
        am.update(&self.db).await.map_err(ServiceError::from_write)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        client::Entity::delete_by_id(id).exec(&self.db).await.map_err(ServiceError::db)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use uuid::Uuid;

    #[tokio::test]
    async fn client_repository_roundtrip() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let repo = SeaOrmClientRepository::new(db);

        let surname = format!("Repo{}", Uuid::new_v4().simple());
        let email = format!("repo_{}@example.com", Uuid::new_v4());
        let saved = repo
            .save(NewClient { name: "Marcin".into(), surname: surname.clone(), email: email.clone() })
            .await?;

        assert_eq!(repo.find_by_id(saved.id).await?, Some(saved.clone()));
        assert_eq!(repo.find_client_by_email(&email).await?, Some(saved.clone()));
        assert_eq!(repo.find_clients_by_surname(&surname).await?, HashSet::from([saved.clone()]));
        assert!(repo.find_clients_by_name("Marcin").await?.contains(&saved));

        let renamed = repo.update(Client { name: "Tomasz".into(), ..saved.clone() }).await?;
        assert_eq!(renamed.name, "Tomasz");

        let duplicate = repo
            .save(NewClient { name: "Tomasz".into(), surname: surname.clone(), email: email.clone() })
            .await;
        assert!(matches!(duplicate, Err(ServiceError::Model(models::errors::ModelError::Conflict(_)))));

        repo.delete_by_id(saved.id).await?;
        assert!(repo.find_by_id(saved.id).await?.is_none());
        // Deleting again is not an error
        repo.delete_by_id(saved.id).await?;
        Ok(())
    }
}
