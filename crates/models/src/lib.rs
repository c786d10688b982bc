//! SeaORM entities of the shop: clients, orders, items and the order/item join table.

pub mod errors;
pub mod db;
pub mod client;
pub mod item;
pub mod order;
pub mod order_item;

#[cfg(test)]
mod tests;
