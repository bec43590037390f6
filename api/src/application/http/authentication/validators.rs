use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginValidator {
    #[validate(length(min = 1, message = "account is required"))]
    #[schema(example = "admin001")]
    pub account: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}
