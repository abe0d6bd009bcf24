//! Signed session credential carrying the user's email.
//!
//! Tokens are HS256 JWTs with `email`, `iat` and `exp` claims. Nothing is
//! persisted server-side: validity is a function of signature and expiry.
use crate::configuration::AuthSettings;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("authentication token is missing")]
    Missing,
    #[error("authentication token is invalid")]
    Invalid,
}

pub const DEFAULT_COOKIE_NAME: &str = "token";

pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
    cookie_name: String,
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
        }
    }

    pub fn from_settings(settings: &AuthSettings) -> Self {
        Self::new(&settings.secret, Duration::days(settings.token_ttl_days))
            .with_cookie_name(&settings.cookie_name)
    }

    pub fn with_cookie_name(mut self, cookie_name: &str) -> Self {
        self.cookie_name = cookie_name.to_string();
        self
    }

    /// Name of the cookie the token travels in.
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    pub fn issue(&self, email: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let issued_at = Utc::now();
        let claims = Claims {
            email: email.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
    }

    pub fn verify(&self, token: Option<&str>) -> Result<Claims, AuthError> {
        let token = token
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::Missing)?;

        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| {
                tracing::debug!("Token rejected: {}", err);
                AuthError::Invalid
            })
    }
}
