//! Service layer providing business-oriented operations on top of models.
//! - Each aggregate has a repository trait, a SeaORM and an in-memory implementation,
//!   and a service that translates missing records into `ServiceError::NotFound`.
//! - Reuses validation and entity definitions in `models` crate.

pub mod errors;
pub mod client;
pub mod item;
pub mod order;
#[cfg(test)]
pub mod test_support;

pub use errors::ServiceError;
