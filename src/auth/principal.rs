//! Request authentication: resolving a bearer token to a [`Principal`].

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};
use model::entities::user;
use std::convert::Infallible;
use tracing::{debug, error};

use crate::auth::jwt::TokenType;
use crate::schemas::AppState;
use crate::service;

/// The authenticated caller: the stored user behind a valid access token.
///
/// Carries the profile category because order listing is scoped by it.
/// Service calls receive the principal explicitly instead of reading
/// ambient request state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: i32,
    pub username: String,
    pub category: String,
}

impl From<user::Model> for Principal {
    fn from(user: user::Model) -> Self {
        Principal {
            user_id: user.id,
            username: user.username,
            category: user.category,
        }
    }
}

/// Extractor yielding `Some(Principal)` for a valid access token and `None`
/// otherwise. It never rejects the request: an absent principal is a value
/// the service layer turns into `Unauthenticated`, not a transport error.
#[derive(Debug, Clone)]
pub struct MaybePrincipal(pub Option<Principal>);

#[axum::async_trait]
impl FromRequestParts<AppState> for MaybePrincipal {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybePrincipal(resolve_principal(parts, state).await))
    }
}

/// Walk the failure paths in order: no header, no bearer scheme, bad or
/// expired token, wrong token type, unknown user. Each one yields `None`.
async fn resolve_principal(parts: &Parts, state: &AppState) -> Option<Principal> {
    let header_value = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())?;
    let token = header_value.strip_prefix("Bearer ")?;

    let claims = match state.jwt.validate_token(token) {
        Ok(claims) => claims,
        Err(err) => {
            debug!("Rejected bearer token: {}", err);
            return None;
        }
    };

    // Refresh tokens are not API credentials
    if claims.token_type != TokenType::Access {
        debug!("Rejected non-access token for user id {}", claims.sub);
        return None;
    }

    let user = match service::users::find_by_id(&state.db, claims.sub).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            debug!("Bearer token references unknown user id {}", claims.sub);
            return None;
        }
        Err(err) => {
            error!("Failed to load user {} for bearer token: {}", claims.sub, err);
            return None;
        }
    };

    Some(Principal::from(user))
}
