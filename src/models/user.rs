//! User model returned by the user API.

use serde::{Deserialize, Serialize};

/// A user as served by `GET /api/users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct User {
    /// Numeric user ID
    pub id: u64,

    /// Display name
    pub name: String,

    /// Contact email address
    pub email: String,
}

impl User {
    /// Create a new user.
    pub fn new(id: u64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}
