//! Profile service: authenticated self-service mutation.
//!
//! Every operation takes the already-resolved caller id; resolution from an
//! authenticated principal happens in `AuthorizationContext`.

use gatehouse_database::{User, UserError, UserRepository, UserResult};
use sqlx::SqlitePool;

use super::mock_repositories::MockUserStore;
use super::user_store::UserStore;
use crate::types::{PasswordChangeRequest, ProfileUpdateRequest};
use crate::utils::password::{hash_password, verify_password};
use crate::utils::validation::MIN_PASSWORD_LEN;

/// Service for profile reads and owner-scoped mutations
pub struct ProfileService<S> {
    store: S,
}

impl ProfileService<UserRepository> {
    /// Create a new profile service backed by the SQL repository
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            store: UserRepository::new(pool),
        }
    }
}

impl ProfileService<MockUserStore> {
    /// Create a new profile service for testing
    pub fn new_for_testing() -> Self {
        Self {
            store: MockUserStore::new(),
        }
    }
}

impl<S> ProfileService<S>
where
    S: UserStore,
{
    /// Create a profile service over an existing store
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Fetch the full profile entity.
    ///
    /// Callers on a display path project through `UserResponse`; the entity
    /// itself never serializes its credential hash.
    pub async fn get_profile(&self, user_id: i64) -> UserResult<User> {
        self.store
            .find_by_id(user_id)
            .await?
            .ok_or(UserError::UserNotFound)
    }

    /// Overwrite the caller's mutable profile fields.
    ///
    /// Username and email are re-checked for uniqueness when they change; a
    /// value already held by the caller themselves is never a conflict.
    pub async fn update_profile(
        &self,
        user_id: i64,
        request: ProfileUpdateRequest,
    ) -> UserResult<User> {
        let mut user = self.get_profile(user_id).await?;

        if user.username != request.username {
            if let Some(existing) = self.store.find_by_username(&request.username).await? {
                if existing.id != user.id {
                    return Err(UserError::UsernameAlreadyExists);
                }
            }
        }

        if user.email != request.email {
            if let Some(existing) = self.store.find_by_email(&request.email).await? {
                if existing.id != user.id {
                    return Err(UserError::EmailAlreadyExists);
                }
            }
        }

        user.username = request.username;
        user.email = request.email;
        user.first_name = request.first_name;
        user.last_name = request.last_name;
        user.phone = request.phone;
        user.touch();

        let user = self.store.save(&user).await?;

        log::info!("Updated profile for user {} (ID: {})", user.username, user.id);

        Ok(user)
    }

    /// Replace the caller's password after re-verifying the current one.
    pub async fn change_password(
        &self,
        user_id: i64,
        request: PasswordChangeRequest,
    ) -> UserResult<()> {
        let mut user = self.get_profile(user_id).await?;

        match verify_password(&request.current_password, &user.password_hash) {
            Ok(true) => {}
            Ok(false) | Err(_) => return Err(UserError::InvalidCredentials),
        }

        if request.new_password != request.confirm_password {
            return Err(UserError::ValidationFailed(
                "New password and confirm password do not match".to_string(),
            ));
        }

        if request.new_password.len() < MIN_PASSWORD_LEN {
            return Err(UserError::ValidationFailed(format!(
                "New password must be at least {MIN_PASSWORD_LEN} characters long"
            )));
        }

        user.password_hash = hash_password(&request.new_password)?;
        user.touch();
        self.store.save(&user).await?;

        log::info!("Password changed for user ID: {}", user_id);

        Ok(())
    }

    /// Delete the caller's account, permanently.
    pub async fn delete_user(&self, user_id: i64) -> UserResult<()> {
        if !self.store.exists_by_id(user_id).await? {
            return Err(UserError::UserNotFound);
        }

        self.store.delete_by_id(user_id).await?;

        log::warn!("Deleted user account (ID: {})", user_id);

        Ok(())
    }
}
