use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::user::entities::User;

/// The authenticated caller of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    User(User),
}

impl Identity {
    pub fn id(&self) -> Uuid {
        match self {
            Identity::User(user) => user.id,
        }
    }

    pub fn account(&self) -> &str {
        match self {
            Identity::User(user) => &user.account,
        }
    }
}

pub struct LoginInput {
    pub account: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginOutput {
    pub access_token: String,
    #[schema(example = "Bearer")]
    pub token_type: String,
    #[schema(example = 3600)]
    pub expires_in: i64,
    pub user: User,
}

pub struct AuthorizeRequestInput {
    pub token: String,
}

pub struct AuthorizeRequestOutput {
    pub identity: Identity,
}
