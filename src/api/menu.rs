//! Menu endpoints - the public menu read and the admin menu/order-window
//! writes.

use axum::{Json, extract::State, response::Response};
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::{
    api::{AppState, response::ApiResponse},
    core,
    errors::Result,
};

/// Request contract for replacing the menu's dishes, prices, and add-ons.
#[derive(Debug, Deserialize)]
pub struct UpdateMenuRequest {
    /// Names of the dishes on the menu
    pub menu_items: Vec<String>,
    /// Price of a full portion in rupees
    pub price_full: f64,
    /// Price of a half portion in rupees
    pub price_half: f64,
    /// Add-ons as a map of name → enabled
    #[serde(default)]
    pub add_ons: BTreeMap<String, bool>,
}

/// Request contract for toggling the order window.
#[derive(Debug, Deserialize)]
pub struct OrderWindowRequest {
    /// Whether new orders are accepted
    pub is_ordering_enabled: bool,
    /// Replacement message shown while ordering is closed
    #[serde(default)]
    pub order_window_message: Option<String>,
}

/// `GET /api/menu`
pub async fn get_menu(State(state): State<AppState>) -> Result<Response> {
    let menu = core::menu::get_or_create_menu(&state.db).await?;
    Ok(ApiResponse::ok(menu))
}

/// `POST /api/menu`
pub async fn update_menu(
    State(state): State<AppState>,
    Json(request): Json<UpdateMenuRequest>,
) -> Result<Response> {
    let menu = core::menu::upsert_menu(
        &state.db,
        request.menu_items,
        request.price_full,
        request.price_half,
        request.add_ons,
    )
    .await?;

    Ok(ApiResponse::ok_with_message(menu, "Menu updated"))
}

/// `POST /api/menu/order-window`
pub async fn set_order_window(
    State(state): State<AppState>,
    Json(request): Json<OrderWindowRequest>,
) -> Result<Response> {
    let menu = core::menu::set_order_window(
        &state.db,
        request.is_ordering_enabled,
        request.order_window_message,
    )
    .await?;

    let message = if menu.is_ordering_enabled {
        "Ordering opened"
    } else {
        "Ordering closed"
    };
    Ok(ApiResponse::ok_with_message(menu, message))
}
