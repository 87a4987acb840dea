use axum::{extract::State, http::StatusCode, response::Json};
use model::entities::order;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};
use utoipa::ToSchema;

use crate::auth::principal::MaybePrincipal;
use crate::error::ApiResult;
use crate::schemas::AppState;
use crate::service;
use crate::service::orders::NewOrder;

/// Request body for creating an order
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateOrderRequest {
    /// Short title (required, non-empty)
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Category tag matched against profile categories on listing
    pub category: String,
}

/// Order response model
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub title: String,
    pub description: String,
    pub category: String,
}

impl From<order::Model> for OrderResponse {
    fn from(model: order::Model) -> Self {
        Self {
            title: model.title,
            description: model.description,
            category: model.category,
        }
    }
}

/// Create a new order owned by the authenticated caller
#[utoipa::path(
    post,
    path = "/orders",
    tag = "orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created successfully", body = OrderResponse),
        (status = 400, description = "Required field missing", body = ErrorResponse),
        (status = 401, description = "Authentication required", body = ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn create_order(
    State(state): State<AppState>,
    MaybePrincipal(principal): MaybePrincipal,
    Json(request): Json<CreateOrderRequest>,
) -> ApiResult<(StatusCode, Json<OrderResponse>)> {
    trace!("Entering create_order handler");
    debug!(
        "Creating order for user: {:?}",
        principal.as_ref().map(|p| p.username.as_str())
    );

    let order = service::orders::create_order(
        &state.db,
        principal.as_ref(),
        NewOrder {
            title: request.title,
            description: request.description,
            category: request.category,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(OrderResponse::from(order))))
}

/// List the orders in the caller's profile category
#[utoipa::path(
    get,
    path = "/orders",
    tag = "orders",
    responses(
        (status = 200, description = "Orders listed successfully", body = Vec<OrderResponse>),
        (status = 401, description = "Authentication required", body = ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn list_orders(
    State(state): State<AppState>,
    MaybePrincipal(principal): MaybePrincipal,
) -> ApiResult<Json<Vec<OrderResponse>>> {
    trace!("Entering list_orders handler");
    debug!(
        "Listing orders for user: {:?}",
        principal.as_ref().map(|p| p.username.as_str())
    );

    let orders = service::orders::list_orders(&state.db, principal.as_ref()).await?;

    if let Some(principal) = principal.as_ref() {
        info!("Orders listed successfully for user: {}", principal.username);
    }

    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}
