//! User entity definitions

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// User entity representing an account in the system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Database primary key, 0 until first persisted
    pub id: i64,
    /// Publicly accessible identifier
    pub public_id: String,
    pub username: String,
    pub email: String,
    /// Salted one-way credential hash, never serialized outward
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub role: UserRole,
    pub created_at: String,
    pub updated_at: String,
}

/// User role enum
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
        }
    }
}

impl From<&str> for UserRole {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "admin" => UserRole::Admin,
            _ => UserRole::User,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl User {
    /// Create a new user instance with the default role
    pub fn new(
        username: String,
        email: String,
        password_hash: String,
        first_name: Option<String>,
        last_name: Option<String>,
        phone: Option<String>,
    ) -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            id: 0, // Will be set by the store
            public_id: cuid2::cuid(),
            username,
            email,
            password_hash,
            first_name,
            last_name,
            phone,
            role: UserRole::User,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Check if the user is an admin
    pub fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Admin)
    }

    /// Update the modification timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now().to_rfc3339();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            "alice".to_string(),
            "alice@example.com".to_string(),
            "$argon2id$stub".to_string(),
            Some("Alice".to_string()),
            Some("Smith".to_string()),
            None,
        )
    }

    #[test]
    fn test_user_creation() {
        let user = sample_user();

        assert_eq!(user.id, 0);
        assert!(!user.public_id.is_empty());
        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.role, UserRole::User);
        assert!(!user.is_admin());
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_user_role_conversion() {
        assert_eq!(UserRole::from("admin"), UserRole::Admin);
        assert_eq!(UserRole::from("ADMIN"), UserRole::Admin);
        assert_eq!(UserRole::from("user"), UserRole::User);
        assert_eq!(UserRole::from("unknown"), UserRole::User);

        assert_eq!(UserRole::User.to_string(), "user");
        assert_eq!(UserRole::Admin.to_string(), "admin");
    }

    #[test]
    fn test_touch_updates_timestamp() {
        let mut user = sample_user();
        let original = user.updated_at.clone();

        std::thread::sleep(std::time::Duration::from_millis(2));
        user.touch();

        assert_ne!(user.updated_at, original);
        assert_eq!(user.created_at, original);
    }

    #[test]
    fn test_password_hash_never_serializes() {
        let user = sample_user();
        let value = serde_json::to_value(&user).unwrap();

        assert!(value.get("password_hash").is_none());
        assert_eq!(value.get("username").unwrap(), "alice");
    }
}
