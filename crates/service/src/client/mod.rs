//! Client aggregate: domain inputs, repository abstraction and the business service.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::{Client, ClientChanges, NewClient};
pub use repository::ClientRepository;
pub use service::ClientService;
