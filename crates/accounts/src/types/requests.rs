//! Request types for the account management core.

use gatehouse_database::UserError;
use serde::{Deserialize, Serialize};

use crate::utils::validation::{validate_email, validate_username};

/// Request to register a new account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
}

impl RegisterRequest {
    /// Validate the registration request.
    ///
    /// Only shape is checked here; the 8-character password minimum applies
    /// to password changes, not to registration.
    pub fn validate(&self) -> Result<(), UserError> {
        validate_username(&self.username)?;
        validate_email(&self.email)?;

        if self.password.is_empty() {
            return Err(UserError::ValidationFailed(
                "Password cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request to update the caller's own profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpdateRequest {
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
}

/// Request to change the caller's password
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordChangeRequest {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}
