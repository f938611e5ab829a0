//! Error types for the account storage layer

use thiserror::Error;

/// General database error
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Database connection error: {0}")]
    ConnectionError(String),

    #[error("Database migration error: {0}")]
    MigrationError(String),
}

/// User-facing account errors.
///
/// Every account operation is terminal on failure; the boundary layer maps
/// these onto its transport of choice.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Username already taken")]
    UsernameAlreadyExists,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Password hashing failed")]
    PasswordHashingFailed,

    #[error("Invalid password hash")]
    InvalidPasswordHash,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Convert database errors to our error types
impl From<sqlx::Error> for UserError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => UserError::UserNotFound,
            sqlx::Error::Database(db_err) => {
                let message = db_err.message();
                if message.contains("UNIQUE constraint failed") {
                    if message.contains("email") {
                        UserError::EmailAlreadyExists
                    } else if message.contains("username") {
                        UserError::UsernameAlreadyExists
                    } else {
                        UserError::DatabaseError(message.to_string())
                    }
                } else {
                    UserError::DatabaseError(message.to_string())
                }
            }
            _ => UserError::DatabaseError(err.to_string()),
        }
    }
}
