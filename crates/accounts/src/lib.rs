//! # Gatehouse Accounts Crate
//!
//! This crate provides the account management core for Gatehouse:
//! registration, credential authentication, and authenticated self-service
//! profile mutation over an abstract user store.
//!
//! ## Architecture
//!
//! - **Services**: Business logic layer (`AccountService`, `ProfileService`,
//!   `AuthorizationContext`)
//! - **Types**: Request and response shapes crossing the boundary layer
//! - **Utils**: Password hashing and input validation
//!
//! Persistence lives in `gatehouse-database`; the services are generic over
//! the [`UserStore`] seam so tests run against an in-memory store.

pub mod services;
pub mod types;
pub mod utils;

// Re-export storage types and repositories
pub use gatehouse_database::{User, UserError, UserRepository, UserResult, UserRole};

// Re-export main types for convenience
pub use services::{
    AccountService, AuthorizationContext, MockUserStore, ProfileService, UserStore,
};
pub use types::{
    AuthResponse, LoginRequest, PasswordChangeRequest, ProfileUpdateRequest, RegisterRequest,
    UserResponse,
};
