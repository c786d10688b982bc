use serde::{Deserialize, Serialize};

/// Persisted client record.
pub type Client = models::client::Model;

/// Input for a new client. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewClient {
    pub name: String,
    pub surname: String,
    pub email: String,
}

/// Partial update; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientChanges {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
}

impl ClientChanges {
    pub fn apply(self, mut client: Client) -> Client {
        if let Some(name) = self.name { client.name = name; }
        if let Some(surname) = self.surname { client.surname = surname; }
        if let Some(email) = self.email { client.email = email; }
        client
    }
}
