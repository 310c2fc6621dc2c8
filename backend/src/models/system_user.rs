//! Models for panel accounts and the login form.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::validation::rules::validate_username;

/// Database representation of a panel account (`usuarios_sistema`).
/// Disjoint from the employee directory; exists only for authentication.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SystemUser {
    /// Unique identifier for the account.
    pub id: i64,
    /// Immutable username used for login (`usuario`).
    pub username: String,
    /// Argon2 hash of the account password.
    pub password_hash: String,
    /// Optional human-readable display name (`nombre`).
    pub display_name: Option<String>,
}

/// Credentials submitted by the login form.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(custom(function = "validate_username"))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}
