use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{Client, ClientChanges, NewClient};
use super::repository::ClientRepository;
use crate::errors::ServiceError;

/// Client-facing business operations on top of a [`ClientRepository`].
///
/// Single-entity lookups by a unique key fail with `NotFound("Client not found")`;
/// set-returning lookups and deletes never report absence as an error.
pub struct ClientService<R: ClientRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: ClientRepository + ?Sized> ClientService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Look up a client by id.
    ///
    /// # Examples
    /// ```
    /// use service::client::{ClientService, NewClient, repository::memory::InMemoryClientRepository};
    /// use std::sync::Arc;
    /// let svc = ClientService::new(Arc::new(InMemoryClientRepository::default()));
    /// let created = tokio_test::block_on(svc.create(NewClient { name: "Marcin".into(), surname: "Abacki".into(), email: "m@example.com".into() })).unwrap();
    /// let found = tokio_test::block_on(svc.find_by_id(created.id)).unwrap();
    /// assert_eq!(found, created);
    /// let missing = tokio_test::block_on(svc.find_by_id(created.id + 1)).unwrap_err();
    /// assert_eq!(missing.to_string(), "Client not found");
    /// ```
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i64) -> Result<Client, ServiceError> {
        self.repo.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found("Client"))
    }

    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Client, ServiceError> {
        self.repo.find_client_by_email(email).await?.ok_or_else(|| ServiceError::not_found("Client"))
    }

    pub async fn find_clients_by_name(&self, name: &str) -> Result<HashSet<Client>, ServiceError> {
        let clients = self.repo.find_clients_by_name(name).await?;
        debug!(name, count = clients.len(), "clients_by_name");
        Ok(clients)
    }

    pub async fn find_clients_by_surname(&self, surname: &str) -> Result<HashSet<Client>, ServiceError> {
        let clients = self.repo.find_clients_by_surname(surname).await?;
        debug!(surname, count = clients.len(), "clients_by_surname");
        Ok(clients)
    }

    pub async fn get_clients(&self) -> Result<HashSet<Client>, ServiceError> {
        self.repo.find_all().await
    }

    /// Validate and store a new client.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create(&self, input: NewClient) -> Result<Client, ServiceError> {
        models::client::validate(&input.name, &input.surname, &input.email)?;
        let client = self.repo.save(input).await?;
        info!(client_id = client.id, "client_created");
        Ok(client)
    }

    /// Apply `changes` to an existing client.
    #[instrument(skip(self, changes))]
    pub async fn update(&self, id: i64, changes: ClientChanges) -> Result<Client, ServiceError> {
        let current = self.find_by_id(id).await?;
        let next = changes.apply(current);
        models::client::validate(&next.name, &next.surname, &next.email)?;
        self.repo.update(next).await
    }

    /// Delete without checking existence first.
    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        self.repo.delete_by_id(id).await?;
        info!(client_id = id, "client_deleted");
        Ok(())
    }
}
