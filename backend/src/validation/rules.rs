//! Validation rules shared across request payloads.

use validator::ValidationError;

/// Validates username format: alphanumeric plus underscore, 1-60 chars,
/// matching the `usuarios_sistema.usuario` column.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.is_empty() || username.len() > 60 {
        return Err(ValidationError::new("username_invalid_length"));
    }

    if !username.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(ValidationError::new("username_invalid_characters"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_rejects_empty() {
        assert!(validate_username("").is_err());
    }

    #[test]
    fn username_rejects_special_chars() {
        assert!(validate_username("admin;--").is_err());
    }

    #[test]
    fn username_accepts_valid() {
        assert!(validate_username("demo_user1").is_ok());
    }
}
