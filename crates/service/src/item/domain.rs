use serde::{Deserialize, Serialize};

pub type Item = models::item::Model;

/// Input for a new item. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub price_cents: i64,
}
