use std::collections::HashSet;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use super::domain::{Client, NewClient};
use crate::errors::ServiceError;

/// Repository abstraction for client persistence.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Client>, ServiceError>;
    async fn find_client_by_email(&self, email: &str) -> Result<Option<Client>, ServiceError>;
    async fn find_clients_by_name(&self, name: &str) -> Result<HashSet<Client>, ServiceError>;
    async fn find_clients_by_surname(&self, surname: &str) -> Result<HashSet<Client>, ServiceError>;
    async fn find_all(&self) -> Result<HashSet<Client>, ServiceError>;
    async fn save(&self, client: NewClient) -> Result<Client, ServiceError>;
    async fn update(&self, client: Client) -> Result<Client, ServiceError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError>;
}

/// In-memory repository for tests and doc examples
pub mod memory {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct InMemoryClientRepository {
        clients: Mutex<BTreeMap<i64, Client>>,
        next_id: Mutex<i64>,
    }

    impl InMemoryClientRepository {
        fn matching(&self, pred: impl Fn(&Client) -> bool) -> HashSet<Client> {
            let clients = self.clients.lock().unwrap();
            clients.values().filter(|c| pred(c)).cloned().collect()
        }

        fn email_taken(clients: &BTreeMap<i64, Client>, email: &str, except: Option<i64>) -> bool {
            clients.values().any(|c| c.email == email && Some(c.id) != except)
        }
    }

    #[async_trait]
    impl ClientRepository for InMemoryClientRepository {
        async fn find_by_id(&self, id: i64) -> Result<Option<Client>, ServiceError> {
            Ok(self.clients.lock().unwrap().get(&id).cloned())
        }

        async fn find_client_by_email(&self, email: &str) -> Result<Option<Client>, ServiceError> {
            let clients = self.clients.lock().unwrap();
            Ok(clients.values().find(|c| c.email == email).cloned())
        }

        async fn find_clients_by_name(&self, name: &str) -> Result<HashSet<Client>, ServiceError> {
            Ok(self.matching(|c| c.name == name))
        }

        async fn find_clients_by_surname(&self, surname: &str) -> Result<HashSet<Client>, ServiceError> {
            Ok(self.matching(|c| c.surname == surname))
        }

        async fn find_all(&self) -> Result<HashSet<Client>, ServiceError> {
            Ok(self.matching(|_| true))
        }

        async fn save(&self, client: NewClient) -> Result<Client, ServiceError> {
            let mut clients = self.clients.lock().unwrap();
            if Self::email_taken(&clients, &client.email, None) {
                return Err(ServiceError::Conflict(models::client::DUPLICATE_EMAIL.to_string()));
            }
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            let saved = Client { id: *next_id, name: client.name, surname: client.surname, email: client.email };
            clients.insert(saved.id, saved.clone());
            Ok(saved)
        }

        async fn update(&self, client: Client) -> Result<Client, ServiceError> {
            let mut clients = self.clients.lock().unwrap();
            if !clients.contains_key(&client.id) {
                return Err(ServiceError::not_found("Client"));
            }
            if Self::email_taken(&clients, &client.email, Some(client.id)) {
                return Err(ServiceError::Conflict(models::client::DUPLICATE_EMAIL.to_string()));
            }
            clients.insert(client.id, client.clone());
            Ok(client)
        }

        async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
            self.clients.lock().unwrap().remove(&id);
            Ok(())
        }
    }
}
