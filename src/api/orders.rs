//! Order endpoints - placement, customer history, and the admin lifecycle
//! and dashboard views.

use axum::{
    Json,
    extract::{Path, State},
    response::Response,
};
use serde::Deserialize;

use crate::{
    api::{AppState, response::ApiResponse},
    core::{self, order::DeliveryDetails},
    entities::order::{OrderStatus, PortionSize},
    errors::{Error, Result},
};

/// Delivery address sub-object of an order placement.
#[derive(Debug, Deserialize)]
pub struct DeliveryAddressRequest {
    /// Street address
    pub address: String,
    /// City
    pub city: String,
    /// Postal code, if known
    #[serde(default)]
    pub postal_code: Option<String>,
    /// Contact phone number
    pub phone: String,
}

/// Request contract for placing an order.
#[derive(Debug, Deserialize)]
pub struct PlaceOrderRequest {
    /// Identity-provider id of the customer
    pub user_id: String,
    /// Names of the ordered dishes
    pub menu_items: Vec<String>,
    /// Portion size
    pub selected_portion: PortionSize,
    /// Selected add-on, if any
    #[serde(default)]
    pub selected_add_on: Option<String>,
    /// Order total in rupees
    pub total: f64,
    /// Where to deliver
    pub delivery_address: DeliveryAddressRequest,
}

/// Request contract for an order status change.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    /// The status to move the order to
    pub status: OrderStatus,
}

/// `POST /api/orders`
pub async fn place_order(
    State(state): State<AppState>,
    Json(request): Json<PlaceOrderRequest>,
) -> Result<Response> {
    let order = core::order::place_order(
        &state.db,
        request.user_id,
        request.menu_items,
        request.selected_portion,
        request.selected_add_on,
        request.total,
        DeliveryDetails {
            address: request.delivery_address.address,
            city: request.delivery_address.city,
            postal_code: request.delivery_address.postal_code,
            phone: request.delivery_address.phone,
        },
    )
    .await?;

    Ok(ApiResponse::created(order))
}

/// `GET /api/orders`
pub async fn list_orders(State(state): State<AppState>) -> Result<Response> {
    let orders = core::order::get_all_orders(&state.db).await?;
    Ok(ApiResponse::ok(orders))
}

/// `GET /api/orders/summary`
pub async fn meal_window_summary(State(state): State<AppState>) -> Result<Response> {
    let summary = core::order::summarize_orders_by_meal_window(&state.db).await?;
    Ok(ApiResponse::ok(summary))
}

/// `GET /api/orders/user/:user_id`
pub async fn list_orders_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Response> {
    let orders = core::order::get_orders_for_user(&state.db, &user_id).await?;
    Ok(ApiResponse::ok(orders))
}

/// `GET /api/orders/:id`
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<i64>,
) -> Result<Response> {
    let order = core::order::get_order_by_id(&state.db, order_id)
        .await?
        .ok_or(Error::OrderNotFound { id: order_id })?;
    Ok(ApiResponse::ok(order))
}

/// `PATCH /api/orders/:id/status`
pub async fn update_status(
    State(state): State<AppState>,
    Path(order_id): Path<i64>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Response> {
    let order = core::order::update_order_status(&state.db, order_id, request.status).await?;
    Ok(ApiResponse::ok_with_message(
        order,
        format!("Order moved to {}", request.status),
    ))
}
