use crate::domain::{
    common::entities::app_errors::CoreError,
    jwt::entities::{Jwt, JwtClaim},
    user::entities::User,
};

/// Signs and verifies access tokens.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, user: User) -> Result<Jwt, CoreError>;

    fn verify(&self, token: String) -> Result<JwtClaim, CoreError>;
}
