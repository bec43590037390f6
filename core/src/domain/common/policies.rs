use std::{future::Future, sync::Arc};

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    user::{entities::User, ports::UserRepository},
};

pub trait Policy: Send + Sync {
    fn get_user_from_identity(
        &self,
        identity: &Identity,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;
}

pub struct FoodtracePolicy<U> {
    user_repository: Arc<U>,
}

impl<U> FoodtracePolicy<U> {
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }
}

impl<U> Policy for FoodtracePolicy<U>
where
    U: UserRepository,
{
    async fn get_user_from_identity(&self, identity: &Identity) -> Result<User, CoreError> {
        self.user_repository
            .get_by_id(identity.id())
            .await?
            .ok_or(CoreError::InvalidToken)
    }
}

/// Turns a policy decision into an error when access is denied.
pub fn ensure_policy(
    result_has_permission: Result<bool, CoreError>,
    error_message: &str,
) -> Result<(), CoreError> {
    match result_has_permission {
        Ok(true) => Ok(()),
        Ok(false) => Err(CoreError::Forbidden(error_message.to_string())),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::services::test_support::user_with_role,
        user::{entities::UserRole, ports::MockUserRepository},
    };

    #[test]
    fn test_ensure_policy() {
        assert!(ensure_policy(Ok(true), "denied").is_ok());
        assert_eq!(
            ensure_policy(Ok(false), "denied"),
            Err(CoreError::Forbidden("denied".to_string()))
        );
        assert_eq!(
            ensure_policy(Err(CoreError::InternalServerError), "denied"),
            Err(CoreError::InternalServerError)
        );
    }

    #[tokio::test]
    async fn test_deleted_user_is_rejected() {
        let mut users = MockUserRepository::new();
        users
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));
        let policy = FoodtracePolicy::new(Arc::new(users));

        let identity = Identity::User(user_with_role(UserRole::Admin));
        assert_eq!(
            policy.get_user_from_identity(&identity).await,
            Err(CoreError::InvalidToken)
        );
    }
}
