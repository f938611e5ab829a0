//! Resolution of an authenticated principal to a stored user.
//!
//! The boundary middleware hands over whatever principal identifier it
//! established (an email); this is the only seam between that layer and the
//! core. Profile operations receive the resolved id explicitly instead of
//! reading an ambient security context.

use gatehouse_database::{UserError, UserRepository, UserResult};
use sqlx::SqlitePool;

use super::mock_repositories::MockUserStore;
use super::user_store::UserStore;
use crate::types::UserId;

/// Resolves the current caller to a user identity
pub struct AuthorizationContext<S> {
    store: S,
}

impl AuthorizationContext<UserRepository> {
    /// Create a new authorization context backed by the SQL repository
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            store: UserRepository::new(pool),
        }
    }
}

impl AuthorizationContext<MockUserStore> {
    /// Create a new authorization context for testing
    pub fn new_for_testing() -> Self {
        Self {
            store: MockUserStore::new(),
        }
    }
}

impl<S> AuthorizationContext<S>
where
    S: UserStore,
{
    /// Create an authorization context over an existing store
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Resolve an authenticated principal (an email) to the owning user id.
    ///
    /// A missing principal and a principal that no longer maps to a stored
    /// user both fail as unauthenticated.
    pub async fn resolve_current_user_id(&self, principal: Option<&str>) -> UserResult<UserId> {
        let email = principal
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .ok_or(UserError::Unauthenticated)?;

        let user = self
            .store
            .find_by_email(email)
            .await?
            .ok_or(UserError::Unauthenticated)?;

        Ok(user.id)
    }
}
