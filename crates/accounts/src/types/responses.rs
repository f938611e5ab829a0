//! Response types for the account management core.

use gatehouse_database::{User, UserRole};
use serde::{Deserialize, Serialize};

/// Public projection of a user, safe to hand to any display path.
///
/// Built from the persisted entity instead of mutating it; the credential
/// hash has no field here at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub public_id: String,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub role: UserRole,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            public_id: user.public_id.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone: user.phone.clone(),
            role: user.role,
        }
    }
}

/// The canonical result of a successful register or login.
///
/// Token issuance happens at the boundary layer, so this carries the
/// authenticated identity only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: UserResponse,
}
