use async_trait::async_trait;

use models::{User, UserCandidate};

use crate::errors::ServiceError;

/// Storage abstraction for users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Append a user under a fresh id unless the email (exact, case-sensitive) is taken.
    ///
    /// The duplicate check and the append must be atomic with respect to other registrations.
    async fn register(&self, candidate: UserCandidate) -> Result<User, ServiceError>;
    /// Whether a user with exactly this email exists. Advisory only; `register` decides.
    async fn contains_email(&self, email: &str) -> bool;
    /// First registered user; stands in for a session lookup.
    async fn current_user(&self) -> Result<User, ServiceError>;
    /// Number of registered users.
    async fn count(&self) -> usize;
}
