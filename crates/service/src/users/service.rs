use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use models::{NewUser, User, UserCandidate};

use super::password::hash_password_blocking;
use super::repo::MemoryUserStore;
use super::repository::UserRepository;
use crate::errors::ServiceError;

/// User operations independent of the web framework.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self { Self { repo } }

    /// Service over a fresh, empty in-memory store.
    pub fn in_memory() -> Self { Self::new(Arc::new(MemoryUserStore::new())) }

    /// Register a new user with a hashed password.
    ///
    /// # Examples
    /// ```
    /// use models::NewUser;
    /// use service::{errors::ServiceError, UserService};
    /// let svc = UserService::in_memory();
    /// let user = tokio_test::block_on(svc.register(NewUser::new("a@x.com", "p", "A", "B"))).unwrap();
    /// assert_eq!(user.email, "a@x.com");
    /// let again = tokio_test::block_on(svc.register(NewUser::new("a@x.com", "q", "C", "D")));
    /// assert!(matches!(again, Err(ServiceError::DuplicateEmail)));
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn register(&self, input: NewUser) -> Result<User, ServiceError> {
        if let Some(client_id) = &input.id {
            debug!(%client_id, "ignoring client-supplied user id");
        }
        // Skip the hash for an email that is already taken. The store re-checks under its lock.
        if self.repo.contains_email(&input.email).await {
            warn!(code = ServiceError::DuplicateEmail.code(), "registration rejected: email already used");
            return Err(ServiceError::DuplicateEmail);
        }
        let candidate = UserCandidate {
            password_hash: hash_password_blocking(input.password).await?,
            email: input.email,
            first_name: input.first_name,
            last_name: input.last_name,
        };
        match self.repo.register(candidate).await {
            Ok(user) => {
                info!(user_id = %user.id, email = %user.email, "user_registered");
                Ok(user)
            }
            Err(e) => {
                warn!(code = e.code(), error = %e, "registration rejected");
                Err(e)
            }
        }
    }

    /// The first registered user.
    ///
    /// Placeholder for a session or token lookup: every caller gets the same record.
    #[instrument(skip(self))]
    pub async fn current_user(&self) -> Result<User, ServiceError> {
        self.repo.current_user().await
    }
}
