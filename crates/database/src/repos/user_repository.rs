//! User repository for database operations.

use crate::entities::{User, UserRole};
use crate::types::{UserError, UserResult};
use sqlx::{Row, SqlitePool};

const USER_COLUMNS: &str = "id, public_id, username, email, password_hash, first_name, last_name, phone, role, created_at, updated_at";

/// Repository for user database operations
#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find user by ID
    pub async fn find_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let row = sqlx::query(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(row_to_user))
    }

    /// Find user by email, matched case-insensitively
    pub async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let row = sqlx::query(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = ? COLLATE NOCASE"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(row_to_user))
    }

    /// Find user by username
    pub async fn find_by_username(&self, username: &str) -> UserResult<Option<User>> {
        let row = sqlx::query(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = ?"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(row_to_user))
    }

    /// Check whether a user with the given id exists
    pub async fn exists_by_id(&self, id: i64) -> UserResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    /// Persist a user: insert when it has no id yet, update otherwise.
    ///
    /// The unique indexes on username/email are the authoritative uniqueness
    /// guard; violations surface as the matching conflict error.
    pub async fn save(&self, user: &User) -> UserResult<User> {
        if user.id == 0 {
            self.insert(user).await
        } else {
            self.update(user).await
        }
    }

    async fn insert(&self, user: &User) -> UserResult<User> {
        let result = sqlx::query(
            "INSERT INTO users (public_id, username, email, password_hash, first_name, last_name, phone, role, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
        )
        .bind(&user.public_id)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.phone)
        .bind(user.role.as_str())
        .bind(&user.created_at)
        .bind(&user.updated_at)
        .execute(&self.pool)
        .await?;

        let user_id = result.last_insert_rowid();

        self.find_by_id(user_id).await?.ok_or_else(|| {
            UserError::DatabaseError("Failed to retrieve created user".to_string())
        })
    }

    async fn update(&self, user: &User) -> UserResult<User> {
        let result = sqlx::query(
            "UPDATE users SET username = ?, email = ?, password_hash = ?, first_name = ?, last_name = ?, phone = ?, role = ?, updated_at = ? WHERE id = ?"
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.phone)
        .bind(user.role.as_str())
        .bind(&user.updated_at)
        .bind(user.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(UserError::UserNotFound);
        }

        self.find_by_id(user.id).await?.ok_or(UserError::UserNotFound)
    }

    /// Delete a user permanently
    pub async fn delete_by_id(&self, id: i64) -> UserResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(UserError::UserNotFound);
        }

        Ok(())
    }

    /// Get user count
    pub async fn count(&self) -> UserResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

fn row_to_user(row: sqlx::sqlite::SqliteRow) -> User {
    User {
        id: row.get("id"),
        public_id: row.get("public_id"),
        username: row.get("username"),
        email: row.get("email"),
        password_hash: row.get("password_hash"),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        phone: row.get("phone"),
        role: UserRole::from(row.get::<String, _>("role").as_str()),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}
