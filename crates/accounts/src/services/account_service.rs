//! Account service: registration and credential authentication.

use gatehouse_database::{User, UserError, UserRepository, UserResult};
use sqlx::SqlitePool;

use super::mock_repositories::MockUserStore;
use super::user_store::UserStore;
use crate::types::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
use crate::utils::password::{hash_password, verify_password};

/// Service for registering accounts and authenticating credentials
pub struct AccountService<S> {
    store: S,
}

impl AccountService<UserRepository> {
    /// Create a new account service backed by the SQL repository
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            store: UserRepository::new(pool),
        }
    }
}

impl AccountService<MockUserStore> {
    /// Create a new account service for testing
    pub fn new_for_testing() -> Self {
        Self {
            store: MockUserStore::new(),
        }
    }
}

impl<S> AccountService<S>
where
    S: UserStore,
{
    /// Create an account service over an existing store
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Register a new account.
    ///
    /// Uniqueness is pre-checked here for precise conflict reporting; the
    /// store's write-time constraints remain the authoritative guard.
    pub async fn register(&self, request: RegisterRequest) -> UserResult<AuthResponse> {
        request.validate()?;

        if self.store.find_by_email(&request.email).await?.is_some() {
            return Err(UserError::EmailAlreadyExists);
        }

        if self
            .store
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            return Err(UserError::UsernameAlreadyExists);
        }

        let password_hash = hash_password(&request.password)?;
        let user = User::new(
            request.username,
            request.email,
            password_hash,
            request.first_name,
            request.last_name,
            request.phone,
        );

        let user = self.store.save(&user).await?;

        log::info!("Registered new user: {} (ID: {})", user.username, user.id);

        Ok(AuthResponse {
            user: UserResponse::from(&user),
        })
    }

    /// Authenticate an email/password pair.
    ///
    /// A missing account, a store failure, and a wrong password are
    /// indistinguishable from the outside.
    pub async fn login(&self, request: LoginRequest) -> UserResult<AuthResponse> {
        let user = match self.store.find_by_email(&request.email).await {
            Ok(Some(user)) => user,
            Ok(None) | Err(_) => return Err(UserError::InvalidCredentials),
        };

        match verify_password(&request.password, &user.password_hash) {
            Ok(true) => {}
            Ok(false) | Err(_) => return Err(UserError::InvalidCredentials),
        }

        log::info!("User logged in: {} (ID: {})", user.username, user.id);

        Ok(AuthResponse {
            user: UserResponse::from(&user),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> AccountService<MockUserStore> {
        AccountService::new_for_testing()
    }

    fn register_request(username: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            first_name: Some("Test".to_string()),
            last_name: Some("User".to_string()),
            phone: None,
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let service = create_test_service();

        let response = service
            .register(register_request("alice", "alice@example.com", "password123"))
            .await
            .unwrap();

        assert!(response.user.id > 0);
        assert_eq!(response.user.username, "alice");
        assert_eq!(response.user.email, "alice@example.com");
        assert_eq!(response.user.role, gatehouse_database::UserRole::User);
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let service = create_test_service();

        service
            .register(register_request("alice", "a@x.com", "password123"))
            .await
            .unwrap();

        let result = service
            .register(register_request("bob", "a@x.com", "pw2"))
            .await;
        assert_eq!(result.unwrap_err(), UserError::EmailAlreadyExists);
    }

    #[tokio::test]
    async fn test_register_duplicate_email_different_case() {
        let service = create_test_service();

        service
            .register(register_request("alice", "a@x.com", "password123"))
            .await
            .unwrap();

        let result = service
            .register(register_request("bob", "A@X.com", "password123"))
            .await;
        assert_eq!(result.unwrap_err(), UserError::EmailAlreadyExists);
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let service = create_test_service();

        service
            .register(register_request("alice", "a@x.com", "password123"))
            .await
            .unwrap();

        let result = service
            .register(register_request("alice", "other@x.com", "password123"))
            .await;
        assert_eq!(result.unwrap_err(), UserError::UsernameAlreadyExists);
    }

    #[tokio::test]
    async fn test_register_invalid_request() {
        let service = create_test_service();

        let result = service
            .register(register_request("alice", "not-an-email", "password123"))
            .await;
        assert!(matches!(result, Err(UserError::ValidationFailed(_))));
    }

    #[tokio::test]
    async fn test_distinct_pairs_all_register() {
        let service = create_test_service();

        for (username, email) in [
            ("alice", "alice@example.com"),
            ("bob", "bob@example.com"),
            ("carol", "carol@example.com"),
        ] {
            service
                .register(register_request(username, email, "password123"))
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn test_login_success() {
        let service = create_test_service();
        service
            .register(register_request("alice", "a@x.com", "password123"))
            .await
            .unwrap();

        let response = service
            .login(LoginRequest {
                email: "a@x.com".to_string(),
                password: "password123".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.user.username, "alice");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let service = create_test_service();
        service
            .register(register_request("alice", "a@x.com", "password123"))
            .await
            .unwrap();

        let result = service
            .login(LoginRequest {
                email: "a@x.com".to_string(),
                password: "wrong".to_string(),
            })
            .await;
        assert_eq!(result.unwrap_err(), UserError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_login_does_not_leak_existence() {
        let service = create_test_service();
        service
            .register(register_request("alice", "a@x.com", "password123"))
            .await
            .unwrap();

        let missing = service
            .login(LoginRequest {
                email: "nobody@x.com".to_string(),
                password: "password123".to_string(),
            })
            .await
            .unwrap_err();

        let mismatch = service
            .login(LoginRequest {
                email: "a@x.com".to_string(),
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(missing, mismatch);
    }
}
