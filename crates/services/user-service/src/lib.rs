//! User Service Library
//!
//! An in-memory user registry: create users from a name and email, look
//! them up by exact email, and count them. Everything runs synchronously on
//! the caller's thread.
//!
//! ```
//! use user_service_lib::{UserManager, UserService};
//!
//! let mut users = UserManager::new();
//! users.create_user("Ada", "ada@x").unwrap();
//!
//! assert_eq!(users.get_user_by_email("ada@x").unwrap().name(), "Ada");
//! assert_eq!(users.get_user_count(), 1);
//! ```

pub mod config;
pub mod repository;
pub mod service;
pub mod telemetry;

pub use config::UserServiceConfig;
pub use domain::{DomainError, DomainResult, User};
pub use repository::{InMemoryUserStore, UserRepository};
pub use service::{UserManager, UserService};
pub use telemetry::init_tracing;
