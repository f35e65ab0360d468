//! User service - Handles user registry use cases.
//!
//! SOLID (SRP): Validates input and delegates storage to a repository.

use std::sync::Arc;

use tracing::{debug, trace};

use domain::{require_text, DomainResult, User, EMAIL_REQUIRED_MESSAGE, NAME_REQUIRED_MESSAGE};

use crate::config::UserServiceConfig;
use crate::repository::{InMemoryUserStore, UserRepository};

/// User service trait for dependency injection.
///
/// Not synchronized: mutation takes `&mut self`, and callers that need
/// shared access wrap the service themselves.
pub trait UserService {
    /// Create a user from a non-blank name and email.
    ///
    /// The original, untrimmed values are stored. Name is checked before
    /// email, so a call with both blank reports the name.
    fn create_user(&mut self, name: &str, email: &str) -> DomainResult<Arc<User>>;

    /// Get the earliest created user with exactly this email
    fn get_user_by_email(&self, email: &str) -> Option<Arc<User>>;

    /// Number of users created so far
    fn get_user_count(&self) -> usize;
}

/// Concrete implementation of UserService using repository.
#[derive(Debug, Default)]
pub struct UserManager<R: UserRepository = InMemoryUserStore> {
    repo: R,
}

impl UserManager {
    /// Create an empty registry backed by an in-memory store
    pub fn new() -> Self {
        Self::with_repository(InMemoryUserStore::new())
    }

    /// Create an empty in-memory registry sized from configuration
    pub fn from_config(config: &UserServiceConfig) -> Self {
        Self::with_repository(InMemoryUserStore::with_capacity(config.initial_capacity))
    }
}

impl<R: UserRepository> UserManager<R> {
    /// Create new user service instance with repository
    pub fn with_repository(repo: R) -> Self {
        Self { repo }
    }

    fn validate(name: &str, email: &str) -> DomainResult<()> {
        require_text(name, NAME_REQUIRED_MESSAGE)?;
        require_text(email, EMAIL_REQUIRED_MESSAGE)
    }
}

impl<R: UserRepository> UserService for UserManager<R> {
    fn create_user(&mut self, name: &str, email: &str) -> DomainResult<Arc<User>> {
        if let Err(err) = Self::validate(name, email) {
            debug!(reason = err.message(), "Rejected user creation");
            return Err(err);
        }

        let user = self.repo.insert(User::new(name, email));
        debug!(count = self.repo.count(), "User created");
        Ok(user)
    }

    fn get_user_by_email(&self, email: &str) -> Option<Arc<User>> {
        let user = self.repo.find_by_email(email);
        trace!(found = user.is_some(), "User lookup by email");
        user
    }

    fn get_user_count(&self) -> usize {
        self.repo.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;
    use domain::DomainError;
    use mockall::predicate;

    #[test]
    fn test_invalid_name_never_reaches_repository() {
        let mut repo = MockUserRepository::new();
        repo.expect_insert().never();

        let mut service = UserManager::with_repository(repo);
        let err = service.create_user("   ", "a@b").unwrap_err();

        assert_eq!(err, DomainError::invalid_argument(NAME_REQUIRED_MESSAGE));
    }

    #[test]
    fn test_invalid_email_never_reaches_repository() {
        let mut repo = MockUserRepository::new();
        repo.expect_insert().never();

        let mut service = UserManager::with_repository(repo);
        let err = service.create_user("A", "").unwrap_err();

        assert_eq!(err.message(), EMAIL_REQUIRED_MESSAGE);
    }

    #[test]
    fn test_create_user_stores_original_values() {
        let mut repo = MockUserRepository::new();
        repo.expect_insert()
            .withf(|user| user.name() == " Ada " && user.email() == " ada@x ")
            .times(1)
            .returning(Arc::new);
        repo.expect_count().return_const(1usize);

        let mut service = UserManager::with_repository(repo);
        let user = service.create_user(" Ada ", " ada@x ").unwrap();

        assert_eq!(user.name(), " Ada ");
        assert_eq!(user.email(), " ada@x ");
    }

    #[test]
    fn test_lookup_delegates_to_repository() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .with(predicate::function(|email: &str| email == "ada@x"))
            .times(1)
            .returning(|_| Some(Arc::new(User::new("Ada", "ada@x"))));

        let service = UserManager::with_repository(repo);
        let user = service.get_user_by_email("ada@x").unwrap();

        assert_eq!(user.name(), "Ada");
    }

    #[test]
    fn test_count_delegates_to_repository() {
        let mut repo = MockUserRepository::new();
        repo.expect_count().return_const(3usize);

        let service = UserManager::with_repository(repo);
        assert_eq!(service.get_user_count(), 3);
    }

    #[test]
    fn test_from_config_starts_empty() {
        let config = UserServiceConfig {
            initial_capacity: 16,
            ..UserServiceConfig::default()
        };

        let service = UserManager::from_config(&config);
        assert_eq!(service.get_user_count(), 0);
    }
}
