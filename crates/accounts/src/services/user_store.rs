//! The persistence seam for the account services.

use gatehouse_database::{User, UserRepository, UserResult};

/// Store abstraction the services are generic over.
///
/// `UserRepository` is the SQL-backed implementation; `MockUserStore`
/// provides the in-memory one used by unit tests. Both enforce uniqueness at
/// write time, so `save` is the authoritative conflict signal and the
/// service-level lookups are only a fast-path pre-check.
pub trait UserStore {
    async fn find_by_id(&self, id: i64) -> UserResult<Option<User>>;
    /// Case-insensitive email lookup.
    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>>;
    async fn find_by_username(&self, username: &str) -> UserResult<Option<User>>;
    async fn exists_by_id(&self, id: i64) -> UserResult<bool>;
    /// Insert when the user has no id yet, update otherwise.
    async fn save(&self, user: &User) -> UserResult<User>;
    async fn delete_by_id(&self, id: i64) -> UserResult<()>;
}

impl UserStore for UserRepository {
    async fn find_by_id(&self, id: i64) -> UserResult<Option<User>> {
        self.find_by_id(id).await
    }

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        self.find_by_email(email).await
    }

    async fn find_by_username(&self, username: &str) -> UserResult<Option<User>> {
        self.find_by_username(username).await
    }

    async fn exists_by_id(&self, id: i64) -> UserResult<bool> {
        self.exists_by_id(id).await
    }

    async fn save(&self, user: &User) -> UserResult<User> {
        self.save(user).await
    }

    async fn delete_by_id(&self, id: i64) -> UserResult<()> {
        self.delete_by_id(id).await
    }
}
