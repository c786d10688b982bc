//! Order aggregate: an optional client reference plus an ordered list of items.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::Order;
pub use repository::OrderRepository;
pub use service::OrderService;
