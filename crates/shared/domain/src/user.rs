//! User domain entity.

/// User domain entity
///
/// A plain value holder. It performs no validation of its own; the registry
/// service checks inputs before constructing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: String,
    email: String,
}

impl User {
    /// Create a user from a name and email, stored verbatim
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// User's name as given at creation
    pub fn name(&self) -> &str {
        &self.name
    }

    /// User's email as given at creation
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}
