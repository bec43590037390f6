use chrono::Utc;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use tracing::{debug, error};

use crate::domain::{
    common::entities::app_errors::CoreError,
    jwt::{
        entities::{Jwt, JwtClaim},
        ports::TokenIssuer,
    },
    user::entities::User,
};

/// HS256 access tokens signed with a shared secret.
#[derive(Clone)]
pub struct HmacTokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expires_in: i64,
}

impl HmacTokenIssuer {
    pub fn new(secret: &str, expires_in: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expires_in,
        }
    }
}

impl TokenIssuer for HmacTokenIssuer {
    fn issue(&self, user: User) -> Result<Jwt, CoreError> {
        let claims = JwtClaim::new(&user, Utc::now().timestamp(), self.expires_in);

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| {
                error!("Failed to sign access token: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Jwt {
            token,
            expires_in: self.expires_in,
        })
    }

    fn verify(&self, token: String) -> Result<JwtClaim, CoreError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<JwtClaim>(&token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => CoreError::TokenExpired,
                _ => {
                    debug!("Rejected access token: {}", e);
                    CoreError::InvalidToken
                }
            })
    }
}
