use tracing::{info, instrument, warn};

use crate::domain::{
    authentication::{
        ports::AuthService,
        value_objects::{
            AuthorizeRequestInput, AuthorizeRequestOutput, Identity, LoginInput, LoginOutput,
        },
    },
    chat::ports::LlmGateway,
    common::{entities::app_errors::CoreError, services::Service},
    crypto::{ports::HasherRepository, value_objects::DUMMY_PASSWORD_HASH},
    health::ports::HealthCheckRepository,
    ingredient::ports::IngredientRepository,
    jwt::ports::TokenIssuer,
    system_config::ports::SystemConfigRepository,
    user::ports::UserRepository,
};

impl<I, U, SC, H, T, L, HC> AuthService for Service<I, U, SC, H, T, L, HC>
where
    I: IngredientRepository,
    U: UserRepository,
    SC: SystemConfigRepository,
    H: HasherRepository,
    T: TokenIssuer,
    L: LlmGateway,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self, input), fields(account = %input.account))]
    async fn login(&self, input: LoginInput) -> Result<LoginOutput, CoreError> {
        let Some(user) = self
            .user_repository
            .get_by_account(input.account.clone())
            .await?
        else {
            self.hasher_repository
                .verify_password(input.password, DUMMY_PASSWORD_HASH.to_string())
                .await?;
            warn!("login attempt for unknown account");
            return Err(CoreError::InvalidCredentials);
        };

        let valid = self
            .hasher_repository
            .verify_password(input.password, user.password_hash.clone())
            .await?;

        if !valid {
            warn!("login attempt with wrong password");
            return Err(CoreError::InvalidCredentials);
        }

        let jwt = self.token_issuer.issue(user.clone())?;

        info!(user_id = %user.id, "user logged in");

        Ok(LoginOutput {
            access_token: jwt.token,
            token_type: "Bearer".to_string(),
            expires_in: jwt.expires_in,
            user,
        })
    }

    async fn authorize_request(
        &self,
        input: AuthorizeRequestInput,
    ) -> Result<AuthorizeRequestOutput, CoreError> {
        let claims = self.token_issuer.verify(input.token)?;

        let user = self
            .user_repository
            .get_by_id(claims.sub)
            .await?
            .ok_or(CoreError::InvalidToken)?;

        Ok(AuthorizeRequestOutput {
            identity: Identity::User(user),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::{
        common::services::test_support::{MockPorts, user_with_role},
        jwt::entities::{Jwt, JwtClaim},
        user::entities::UserRole,
    };

    fn login_input(password: &str) -> LoginInput {
        LoginInput {
            account: "admin001".to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_issues_bearer_token() {
        let mut ports = MockPorts::default();
        let user = user_with_role(UserRole::Admin);
        let stored = user.clone();
        ports.users.expect_get_by_account().returning(move |_| {
            let stored = stored.clone();
            Box::pin(async move { Ok(Some(stored)) })
        });
        ports
            .hasher
            .expect_verify_password()
            .withf(|password, hash| password == "000000" && hash == "$argon2id$hash")
            .returning(|_, _| Box::pin(async { Ok(true) }));
        ports.tokens.expect_issue().returning(|_| {
            Ok(Jwt {
                token: "signed.jwt.token".to_string(),
                expires_in: 3600,
            })
        });
        let service = ports.build();

        let output = service.login(login_input("000000")).await.unwrap();

        assert_eq!(output.access_token, "signed.jwt.token");
        assert_eq!(output.token_type, "Bearer");
        assert_eq!(output.expires_in, 3600);
        assert_eq!(output.user, user);
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_account_look_the_same() {
        let mut ports = MockPorts::default();
        let stored = user_with_role(UserRole::Admin);
        ports.users.expect_get_by_account().returning(move |_| {
            let stored = stored.clone();
            Box::pin(async move { Ok(Some(stored)) })
        });
        ports
            .hasher
            .expect_verify_password()
            .returning(|_, _| Box::pin(async { Ok(false) }));
        ports.tokens.expect_issue().never();
        let service = ports.build();

        assert_eq!(
            service.login(login_input("wrong")).await,
            Err(CoreError::InvalidCredentials)
        );

        let mut ports = MockPorts::default();
        ports
            .users
            .expect_get_by_account()
            .returning(|_| Box::pin(async { Ok(None) }));
        ports
            .hasher
            .expect_verify_password()
            .times(1)
            .withf(|_, hash| hash == DUMMY_PASSWORD_HASH)
            .returning(|_, _| Box::pin(async { Ok(false) }));
        ports.tokens.expect_issue().never();
        let service = ports.build();

        assert_eq!(
            service.login(login_input("000000")).await,
            Err(CoreError::InvalidCredentials)
        );
    }

    #[tokio::test]
    async fn test_authorize_request_reloads_user() {
        let mut ports = MockPorts::default();
        let user = user_with_role(UserRole::User);
        let claims = JwtClaim::new(&user, Utc::now().timestamp(), 3600);
        ports
            .tokens
            .expect_verify()
            .returning(move |_| Ok(claims.clone()));
        let stored = user.clone();
        ports.users.expect_get_by_id().returning(move |_| {
            let stored = stored.clone();
            Box::pin(async move { Ok(Some(stored)) })
        });
        let service = ports.build();

        let output = service
            .authorize_request(AuthorizeRequestInput {
                token: "signed.jwt.token".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(output.identity, Identity::User(user));
    }

    #[tokio::test]
    async fn test_authorize_request_rejects_token_of_removed_user() {
        let mut ports = MockPorts::default();
        let user = user_with_role(UserRole::Admin);
        let claims = JwtClaim::new(&user, Utc::now().timestamp(), 3600);
        ports
            .tokens
            .expect_verify()
            .returning(move |_| Ok(claims.clone()));
        ports
            .users
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));
        let service = ports.build();

        let result = service
            .authorize_request(AuthorizeRequestInput {
                token: "signed.jwt.token".to_string(),
            })
            .await;

        assert!(matches!(result, Err(CoreError::InvalidToken)));
    }

    #[tokio::test]
    async fn test_authorize_request_propagates_expiry() {
        let mut ports = MockPorts::default();
        ports
            .tokens
            .expect_verify()
            .returning(|_| Err(CoreError::TokenExpired));
        ports.users.expect_get_by_id().never();
        let service = ports.build();

        let result = service
            .authorize_request(AuthorizeRequestInput {
                token: "expired".to_string(),
            })
            .await;

        assert!(matches!(result, Err(CoreError::TokenExpired)));
    }
}
