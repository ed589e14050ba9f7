use async_trait::async_trait;
use tokio::sync::RwLock;

use models::{User, UserCandidate};

use crate::errors::ServiceError;
use crate::ids::new_id;
use crate::users::repository::UserRepository;

/// Process-local user list. The email scan and the append share one write guard.
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl UserRepository for MemoryUserStore {
    async fn register(&self, candidate: UserCandidate) -> Result<User, ServiceError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == candidate.email) {
            return Err(ServiceError::DuplicateEmail);
        }
        let user = candidate.into_user(new_id());
        users.push(user.clone());
        Ok(user)
    }

    async fn contains_email(&self, email: &str) -> bool {
        self.users.read().await.iter().any(|u| u.email == email)
    }

    async fn current_user(&self) -> Result<User, ServiceError> {
        self.users
            .read()
            .await
            .first()
            .cloned()
            .ok_or_else(|| ServiceError::not_found("user"))
    }

    async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}
