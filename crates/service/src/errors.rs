use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("email already used")]
    DuplicateEmail,
    #[error("{0}")]
    NotFound(String),
    #[error("hashing error: {0}")]
    Hash(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::DuplicateEmail => 1002,
            ServiceError::NotFound(_) => 1003,
            ServiceError::Hash(_) => 1101,
        }
    }
}
