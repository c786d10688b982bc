use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Message is shown verbatim, e.g. `Client not found`.
    #[error("{0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn db(e: impl std::fmt::Display) -> Self { Self::Db(e.to_string()) }

    /// Like [`ServiceError::db`], but a unique-key violation becomes `Conflict`.
    pub fn from_write(e: sea_orm::DbErr) -> Self {
        match e.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => {
                Self::Conflict(models::client::DUPLICATE_EMAIL.to_string())
            }
            _ => Self::db(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ServiceError;

    #[test]
    fn not_found_message_is_plain() {
        let err = ServiceError::not_found("Client");
        assert_eq!(err.to_string(), "Client not found");
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == "Client not found"));
    }

    #[test]
    fn model_errors_convert() {
        let err: ServiceError = models::errors::ModelError::Validation("invalid email".into()).into();
        assert_eq!(err.to_string(), "model error: validation error: invalid email");
    }

    #[test]
    fn non_constraint_write_errors_stay_db() {
        let err = ServiceError::from_write(sea_orm::DbErr::Custom("connection reset".into()));
        assert!(matches!(err, ServiceError::Db(_)));
    }
}
