use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::user::entities::{User, UserRole};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaim {
    pub sub: Uuid,
    pub account: String,
    pub role: UserRole,
    pub iat: i64,
    pub exp: i64,
}

impl JwtClaim {
    pub fn new(user: &User, issued_at: i64, expires_in: i64) -> Self {
        Self {
            sub: user.id,
            account: user.account.clone(),
            role: user.role,
            iat: issued_at,
            exp: issued_at + expires_in,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jwt {
    pub token: String,
    pub expires_in: i64,
}
