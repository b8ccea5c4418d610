//! # Validation Utilities
//!
//! Input validation helpers.

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate email format (basic check).
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.contains('@') && email.contains('.') {
        Ok(())
    } else {
        Err("Invalid email format".to_string())
    }
}

/// Validate minimum length.
pub fn validate_min_length(value: &str, min: usize, field_name: &str) -> Result<(), String> {
    if value.len() < min {
        Err(format!("{} must be at least {} characters", field_name, min))
    } else {
        Ok(())
    }
}

/// Validate that a password and its confirmation match.
pub fn validate_passwords_match(password: &str, confirm_password: &str) -> Result<(), String> {
    if password == confirm_password {
        Ok(())
    } else {
        Err("Passwords don't match".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("value", "Field").is_ok());
        assert_eq!(
            validate_not_empty("   ", "App name").unwrap_err(),
            "App name cannot be empty"
        );
    }

    #[test]
    fn test_validate_passwords_match() {
        assert!(validate_passwords_match("secret1", "secret1").is_ok());
        assert!(validate_passwords_match("secret1", "secret2").is_err());
    }
}
