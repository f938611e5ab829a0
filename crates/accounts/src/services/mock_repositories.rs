//! In-memory store implementation for testing the service layer.

use std::collections::HashMap;
use std::sync::Arc;

use gatehouse_database::{User, UserError, UserResult};
use tokio::sync::RwLock;

use super::user_store::UserStore;

/// Mock user store backed by a HashMap.
///
/// Mirrors the database's write-time uniqueness rules so service tests see
/// the same conflict behavior as the SQL repository.
#[derive(Clone)]
pub struct MockUserStore {
    users: Arc<RwLock<HashMap<i64, User>>>,
    next_id: Arc<RwLock<i64>>,
}

impl MockUserStore {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(RwLock::new(1)),
        }
    }
}

impl UserStore for MockUserStore {
    async fn find_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn find_by_username(&self, username: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> UserResult<bool> {
        let users = self.users.read().await;
        Ok(users.contains_key(&id))
    }

    async fn save(&self, user: &User) -> UserResult<User> {
        let mut users = self.users.write().await;

        // Write-time uniqueness, same rules as the database indexes
        for other in users.values() {
            if other.id == user.id {
                continue;
            }
            if other.email.eq_ignore_ascii_case(&user.email) {
                return Err(UserError::EmailAlreadyExists);
            }
            if other.username == user.username {
                return Err(UserError::UsernameAlreadyExists);
            }
        }

        let mut stored = user.clone();
        if stored.id == 0 {
            let mut next_id = self.next_id.write().await;
            stored.id = *next_id;
            *next_id += 1;
        } else if !users.contains_key(&stored.id) {
            return Err(UserError::UserNotFound);
        }

        users.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn delete_by_id(&self, id: i64) -> UserResult<()> {
        let mut users = self.users.write().await;
        if users.remove(&id).is_some() {
            Ok(())
        } else {
            Err(UserError::UserNotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user(username: &str, email: &str) -> User {
        User::new(
            username.to_string(),
            email.to_string(),
            "$argon2id$stub".to_string(),
            None,
            None,
            None,
        )
    }

    #[tokio::test]
    async fn test_save_assigns_ids() {
        let store = MockUserStore::new();

        let alice = store.save(&test_user("alice", "alice@example.com")).await.unwrap();
        let bob = store.save(&test_user("bob", "bob@example.com")).await.unwrap();

        assert_eq!(alice.id, 1);
        assert_eq!(bob.id, 2);
    }

    #[tokio::test]
    async fn test_email_lookup_ignores_case() {
        let store = MockUserStore::new();
        let alice = store.save(&test_user("alice", "Alice@Example.com")).await.unwrap();

        let found = store.find_by_email("alice@example.com").await.unwrap().unwrap();
        assert_eq!(found.id, alice.id);
    }

    #[tokio::test]
    async fn test_uniqueness_enforced_on_save() {
        let store = MockUserStore::new();
        store.save(&test_user("alice", "alice@example.com")).await.unwrap();

        let result = store.save(&test_user("bob", "ALICE@example.com")).await;
        assert_eq!(result, Err(UserError::EmailAlreadyExists));

        let result = store.save(&test_user("alice", "new@example.com")).await;
        assert_eq!(result, Err(UserError::UsernameAlreadyExists));
    }

    #[tokio::test]
    async fn test_updating_own_row_is_not_a_conflict() {
        let store = MockUserStore::new();
        let mut alice = store.save(&test_user("alice", "alice@example.com")).await.unwrap();

        alice.first_name = Some("Alice".to_string());
        let updated = store.save(&alice).await.unwrap();
        assert_eq!(updated.id, alice.id);
        assert_eq!(updated.first_name, Some("Alice".to_string()));
    }

    #[tokio::test]
    async fn test_delete_then_delete_again() {
        let store = MockUserStore::new();
        let alice = store.save(&test_user("alice", "alice@example.com")).await.unwrap();

        store.delete_by_id(alice.id).await.unwrap();
        assert_eq!(
            store.delete_by_id(alice.id).await,
            Err(UserError::UserNotFound)
        );
    }
}
