//! Shared types for the account management core.

pub mod requests;
pub mod responses;

// Re-export common types
pub use requests::{LoginRequest, PasswordChangeRequest, ProfileUpdateRequest, RegisterRequest};
pub use responses::{AuthResponse, UserResponse};

// Common type aliases
pub type UserId = i64;
