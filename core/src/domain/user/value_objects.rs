use super::entities::UserRole;

#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub account: String,
    pub password_hash: String,
    pub role: UserRole,
}
