use std::future::Future;

use crate::domain::{
    authentication::value_objects::{
        AuthorizeRequestInput, AuthorizeRequestOutput, LoginInput, LoginOutput,
    },
    common::entities::app_errors::CoreError,
};

pub trait AuthService: Send + Sync {
    fn login(&self, input: LoginInput)
    -> impl Future<Output = Result<LoginOutput, CoreError>> + Send;

    fn authorize_request(
        &self,
        input: AuthorizeRequestInput,
    ) -> impl Future<Output = Result<AuthorizeRequestOutput, CoreError>> + Send;
}
