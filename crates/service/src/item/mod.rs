//! Item (product) aggregate.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::{Item, NewItem};
pub use repository::ItemRepository;
pub use service::ItemService;
