//! Input validation utilities.

use gatehouse_database::UserError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum length accepted when a password is changed.
pub const MIN_PASSWORD_LEN: usize = 8;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

static USERNAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap());

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), UserError> {
    if !EMAIL_RE.is_match(email) {
        return Err(UserError::ValidationFailed(
            "Invalid email format".to_string(),
        ));
    }

    if email.len() > 255 {
        return Err(UserError::ValidationFailed("Email too long".to_string()));
    }

    Ok(())
}

/// Validate username
pub fn validate_username(username: &str) -> Result<(), UserError> {
    if username.len() < 3 {
        return Err(UserError::ValidationFailed(
            "Username must be at least 3 characters long".to_string(),
        ));
    }

    if username.len() > 30 {
        return Err(UserError::ValidationFailed(
            "Username must be less than 30 characters long".to_string(),
        ));
    }

    if !USERNAME_RE.is_match(username) {
        return Err(UserError::ValidationFailed(
            "Username can only contain letters, numbers, underscores, and hyphens".to_string(),
        ));
    }

    Ok(())
}
