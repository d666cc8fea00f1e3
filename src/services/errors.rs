use thiserror::Error;

/// Error taxonomy surfaced by service layer functions.
///
/// Routes translate each variant to a status code and response envelope;
/// only messages placed here are ever shown to a client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Request data failed field validation.
    #[error("{0}")]
    Validation(String),
    /// The supplied identifier does not match the storage id shape.
    #[error("{0}")]
    InvalidId(String),
    /// Requested resource was not found.
    #[error("{0}")]
    NotFound(String),
    /// A uniqueness constraint was violated.
    #[error("{0}")]
    Conflict(String),
    /// An unexpected internal error occurred. Details are logged, never
    /// returned to the client.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
