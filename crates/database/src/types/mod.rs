//! Shared types and result types for the storage layer

pub mod errors;

// Re-export common types
pub use errors::{DatabaseError, UserError};

// Common result types
pub type DatabaseResult<T> = Result<T, DatabaseError>;
pub type UserResult<T> = Result<T, UserError>;
