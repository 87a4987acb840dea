use sea_orm::DatabaseConnection;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::auth::jwt::JwtService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
    /// Token issuance and validation
    pub jwt: JwtService,
}

/// Plain message response, used by the probe endpoint
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    /// Response message
    pub message: String,
}

/// Error response
///
/// Every error body on the wire has exactly this shape.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::status::status,
        crate::handlers::auth::register,
        crate::handlers::auth::login,
        crate::handlers::orders::create_order,
        crate::handlers::orders::list_orders,
    ),
    components(
        schemas(
            MessageResponse,
            ErrorResponse,
            crate::handlers::auth::RegisterRequest,
            crate::handlers::auth::LoginRequest,
            crate::handlers::auth::TokenPairResponse,
            crate::handlers::orders::CreateOrderRequest,
            crate::handlers::orders::OrderResponse,
        )
    ),
    tags(
        (name = "status", description = "Service status endpoints"),
        (name = "auth", description = "Registration and login endpoints"),
        (name = "orders", description = "Order creation and listing endpoints"),
    ),
    info(
        title = "Order Management API",
        description = "Order management backend - user registration, login, and category-scoped order handling",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
