use std::sync::Arc;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::{error::AppError, state::AppState, token::TokenValidator};

/// Header carrying the end-user identity on item and read routes.
pub const USER_ID_HEADER: &str = "userId";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

/// Route guard for the service-to-service token.
#[derive(Clone)]
pub struct AccessGate {
    validator: Option<Arc<dyn TokenValidator>>,
    protect_reads: bool,
}

impl AccessGate {
    /// Gate that lets every request through.
    pub fn open() -> Self {
        Self {
            validator: None,
            protect_reads: false,
        }
    }

    pub fn protected(validator: Arc<dyn TokenValidator>, protect_reads: bool) -> Self {
        Self {
            validator: Some(validator),
            protect_reads,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.validator.is_some()
    }

    /// Fails closed: a missing or invalid token is always [`AppError::Forbidden`].
    pub fn check(&self, token: Option<&str>, access: Access) -> Result<(), AppError> {
        let Some(validator) = &self.validator else {
            return Ok(());
        };
        if access == Access::Read && !self.protect_reads {
            return Ok(());
        }
        match token {
            Some(token) if validator.validate(token) => Ok(()),
            _ => Err(AppError::Forbidden),
        }
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    let value = parts.headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    (!token.is_empty()).then_some(token)
}

/// Caller allowed to mutate favorites.
#[derive(Debug, Clone, Copy)]
pub struct ServiceCaller;

/// Caller allowed to read favorites.
#[derive(Debug, Clone, Copy)]
pub struct ReadCaller;

impl FromRequestParts<AppState> for ServiceCaller {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        state.gate.check(bearer_token(parts), Access::Write)?;
        Ok(ServiceCaller)
    }
}

impl FromRequestParts<AppState> for ReadCaller {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        state.gate.check(bearer_token(parts), Access::Read)?;
        Ok(ReadCaller)
    }
}

/// Owner id taken from the `userId` header.
#[derive(Debug, Clone)]
pub struct OwnerId(pub String);

impl<S> FromRequestParts<S> for OwnerId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(USER_ID_HEADER)
            .ok_or_else(|| AppError::BadRequest("Missing userId header".into()))?
            .to_str()
            .map_err(|_| AppError::BadRequest("Invalid userId header".into()))?
            .trim();

        if value.is_empty() {
            return Err(AppError::BadRequest("Missing userId header".into()));
        }
        Ok(OwnerId(value.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str);

    impl TokenValidator for Fixed {
        fn validate(&self, token: &str) -> bool {
            token == self.0
        }
    }

    #[test]
    fn open_gate_allows_everything() {
        let gate = AccessGate::open();
        assert!(gate.check(None, Access::Write).is_ok());
        assert!(gate.check(None, Access::Read).is_ok());
    }

    #[test]
    fn protected_gate_fails_closed() {
        let gate = AccessGate::protected(Arc::new(Fixed("good")), true);
        assert!(gate.check(Some("good"), Access::Write).is_ok());
        assert!(matches!(gate.check(Some("bad"), Access::Write), Err(AppError::Forbidden)));
        assert!(matches!(gate.check(None, Access::Write), Err(AppError::Forbidden)));
        assert!(matches!(gate.check(None, Access::Read), Err(AppError::Forbidden)));
    }

    #[test]
    fn reads_can_be_left_open() {
        let gate = AccessGate::protected(Arc::new(Fixed("good")), false);
        assert!(gate.check(None, Access::Read).is_ok());
        assert!(gate.check(None, Access::Write).is_err());
    }
}
