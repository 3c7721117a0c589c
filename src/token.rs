//! Service-to-service tokens: HS256 JWTs signed with a shared secret.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Decides whether a caller-supplied token is acceptable.
pub trait TokenValidator: Send + Sync {
    fn validate(&self, token: &str) -> bool;
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ServiceClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

pub struct JwtTokenValidator {
    key: DecodingKey,
    validation: Validation,
}

impl JwtTokenValidator {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);
        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }
}

impl TokenValidator for JwtTokenValidator {
    fn validate(&self, token: &str) -> bool {
        match decode::<ServiceClaims>(token, &self.key, &self.validation) {
            Ok(_) => true,
            Err(err) => {
                tracing::debug!(error = %err, "service token rejected");
                false
            }
        }
    }
}

/// Mint a token for `subject` that expires after `ttl`.
pub fn issue_service_token(secret: &str, subject: &str, ttl: Duration) -> anyhow::Result<String> {
    let now = Utc::now();
    let expiration = now
        .checked_add_signed(ttl)
        .ok_or_else(|| anyhow::anyhow!("Failed to set expiration"))?;

    let claims = ServiceClaims {
        sub: subject.to_owned(),
        iat: now.timestamp(),
        exp: expiration.timestamp(),
        jti: Uuid::new_v4().to_string(),
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_tokens_signed_with_the_same_secret() {
        let token = issue_service_token("secret", "catalog", Duration::minutes(5)).unwrap();
        assert!(JwtTokenValidator::new("secret").validate(&token));
    }

    #[test]
    fn rejects_wrong_secret_and_garbage() {
        let token = issue_service_token("secret", "catalog", Duration::minutes(5)).unwrap();
        let validator = JwtTokenValidator::new("other");
        assert!(!validator.validate(&token));
        assert!(!validator.validate("not-a-jwt"));
        assert!(!validator.validate(""));
    }

    #[test]
    fn rejects_expired_tokens() {
        let token = issue_service_token("secret", "catalog", Duration::hours(-1)).unwrap();
        assert!(!JwtTokenValidator::new("secret").validate(&token));
    }
}
