use serde::{Deserialize, Serialize};

use crate::item::Item;

/// Order with its items resolved, in the order they were added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub client_id: Option<i64>,
    pub items: Vec<Item>,
}

impl Order {
    /// A freshly stored order: no items yet.
    pub fn new(id: i64, client_id: Option<i64>) -> Self {
        Self { id, client_id, items: Vec::new() }
    }
}
