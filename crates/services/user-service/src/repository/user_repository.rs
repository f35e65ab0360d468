//! In-memory user repository.

use std::sync::Arc;

use domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Storage only: implementations accept whatever they are given and leave
/// validation to the service layer.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait UserRepository {
    /// Append a user and return a handle to the stored value
    fn insert(&mut self, user: User) -> Arc<User>;

    /// Find the earliest stored user whose email matches exactly
    fn find_by_email(&self, email: &str) -> Option<Arc<User>>;

    /// Number of stored users
    fn count(&self) -> usize;
}

/// Insertion-ordered, Vec-backed implementation of UserRepository
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: Vec<Arc<User>>,
}

impl InMemoryUserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with room for `capacity` users
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            users: Vec::with_capacity(capacity),
        }
    }
}

impl UserRepository for InMemoryUserStore {
    fn insert(&mut self, user: User) -> Arc<User> {
        let user = Arc::new(user);
        self.users.push(Arc::clone(&user));
        user
    }

    fn find_by_email(&self, email: &str) -> Option<Arc<User>> {
        self.users
            .iter()
            .find(|user| user.email() == email)
            .cloned()
    }

    fn count(&self) -> usize {
        self.users.len()
    }
}
