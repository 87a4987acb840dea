use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace, warn};
use utoipa::ToSchema;

use crate::error::{ApiError, ApiResult};
use crate::schemas::AppState;
use crate::service;
use crate::service::users::NewUser;

/// Request body for registering a new user
#[derive(Deserialize, Serialize, ToSchema)]
pub struct RegisterRequest {
    /// Username (must be unique)
    pub username: String,
    /// Email address (must be unique)
    pub email: String,
    /// Clear-text password; only its argon2 hash is stored
    pub password: String,
    /// Profile category scoping the user's order listings
    pub category: String,
}

/// Request body for logging in
#[derive(Deserialize, Serialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Token pair returned by register and login
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenPairResponse {
    /// Refresh token; not accepted as an API credential
    pub refresh: String,
    /// Access token for the Authorization header
    pub access: String,
}

/// Register a new user and issue their first token pair
#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User registered successfully", body = TokenPairResponse),
        (status = 400, description = "Username or email already taken, or a required field missing", body = ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<Json<TokenPairResponse>> {
    trace!("Entering register handler");
    debug!("Register attempt for user: {}", request.username);

    let user = service::users::register_user(
        &state.db,
        NewUser {
            username: request.username,
            email: request.email,
            password: request.password,
            category: request.category,
        },
    )
    .await?;

    let pair = state.jwt.issue_token_pair(&user)?;

    info!("User {} registered successfully", user.username);
    Ok(Json(TokenPairResponse {
        refresh: pair.refresh,
        access: pair.access,
    }))
}

/// Verify credentials and issue a fresh token pair
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenPairResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<TokenPairResponse>> {
    trace!("Entering login handler");
    debug!("Login attempt for user: {}", request.username);

    let user = match service::users::authenticate_credentials(
        &state.db,
        &request.username,
        &request.password,
    )
    .await
    {
        Ok(user) => user,
        Err(err) => {
            if matches!(err, ApiError::InvalidCredentials) {
                warn!("Login failed for user: {}", request.username);
            }
            return Err(err);
        }
    };

    let pair = state.jwt.issue_token_pair(&user)?;

    info!("User {} logged in successfully", user.username);
    Ok(Json(TokenPairResponse {
        refresh: pair.refresh,
        access: pair.access,
    }))
}
