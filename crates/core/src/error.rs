use crate::types::DbId;

/// Domain-level error type shared across crates.
///
/// Every variant is recoverable at the request boundary; the api crate maps
/// them to HTTP statuses.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Not found: {0}")]
    NotFoundMsg(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
