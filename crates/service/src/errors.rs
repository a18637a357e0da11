use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("store error: {0}")]
    Store(String),
}

impl ServiceError {
    pub fn phone_not_found() -> Self { Self::NotFound("Phone number not found".into()) }
    pub fn phone_exists() -> Self { Self::Conflict("Phone number already exists".into()) }
    pub fn missing_field(field: &str) -> Self { Self::Validation(format!("{field} must be a non-empty string")) }
}

impl From<redis::RedisError> for ServiceError {
    fn from(e: redis::RedisError) -> Self { Self::Store(e.to_string()) }
}
