use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{entities::User, value_objects::CreateUserRequest},
};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn get_by_id(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn get_by_account(
        &self,
        account: String,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn create_user(
        &self,
        request: CreateUserRequest,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;
}
