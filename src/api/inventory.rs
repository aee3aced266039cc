//! Inventory endpoints - item CRUD, stock updates, and the ledger history.
//!
//! List and read responses embed the derived `stock_status` and
//! `total_value` alongside the stored fields so the admin dashboard never
//! recomputes thresholds client-side.

use axum::{
    Json,
    extract::{Path, State},
    response::Response,
};
use serde::{Deserialize, Serialize};

use crate::{
    api::{AppState, response::{ApiResponse, message_only}},
    core::{
        self,
        inventory::{ItemUpdate, StockOperation},
    },
    entities::inventory_item::{self, InventoryCategory, InventoryUnit, StockStatus},
    errors::{Error, Result},
};

/// Inventory item as served to clients: stored fields plus derived values.
#[derive(Debug, Serialize)]
pub struct InventoryItemResponse {
    /// The stored item
    #[serde(flatten)]
    pub item: inventory_item::Model,
    /// Derived stock classification
    pub stock_status: StockStatus,
    /// Derived stock value: `current_stock` × `cost_per_unit`
    pub total_value: f64,
}

impl From<inventory_item::Model> for InventoryItemResponse {
    fn from(item: inventory_item::Model) -> Self {
        let stock_status = item.stock_status();
        let total_value = item.total_value();
        Self {
            item,
            stock_status,
            total_value,
        }
    }
}

/// Request contract for creating an inventory item.
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    /// Item name
    pub name: String,
    /// Item category
    pub category: InventoryCategory,
    /// Opening stock level
    pub current_stock: f64,
    /// Low-stock threshold
    pub min_stock_level: f64,
    /// Overstock threshold
    pub max_stock_level: f64,
    /// Unit of measure
    pub unit: InventoryUnit,
    /// Cost per unit in rupees
    pub cost_per_unit: f64,
}

/// Request contract for a stock-level update.
#[derive(Debug, Deserialize)]
pub struct StockUpdateRequest {
    /// Positive quantity to move
    pub quantity: f64,
    /// Direction of the movement
    pub operation: StockOperation,
    /// Optional note stored in the ledger
    #[serde(default)]
    pub note: Option<String>,
    /// Who performed the change
    #[serde(default)]
    pub updated_by: Option<String>,
}

/// `GET /api/inventory`
pub async fn list_items(State(state): State<AppState>) -> Result<Response> {
    let items = core::inventory::get_all_active_items(&state.db).await?;
    let items: Vec<InventoryItemResponse> = items.into_iter().map(Into::into).collect();
    Ok(ApiResponse::ok(items))
}

/// `GET /api/inventory/:id`
pub async fn get_item(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
) -> Result<Response> {
    let item = core::inventory::get_item_by_id(&state.db, item_id)
        .await?
        .ok_or(Error::InventoryItemNotFound { id: item_id })?;
    Ok(ApiResponse::ok(InventoryItemResponse::from(item)))
}

/// `POST /api/inventory`
pub async fn create_item(
    State(state): State<AppState>,
    Json(request): Json<CreateItemRequest>,
) -> Result<Response> {
    let item = core::inventory::create_item(
        &state.db,
        request.name,
        request.category,
        request.current_stock,
        request.min_stock_level,
        request.max_stock_level,
        request.unit,
        request.cost_per_unit,
    )
    .await?;

    Ok(ApiResponse::created(InventoryItemResponse::from(item)))
}

/// `PUT /api/inventory/:id`
pub async fn update_item(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
    Json(update): Json<ItemUpdate>,
) -> Result<Response> {
    let item = core::inventory::update_item(&state.db, item_id, update).await?;
    Ok(ApiResponse::ok(InventoryItemResponse::from(item)))
}

/// `DELETE /api/inventory/:id`
pub async fn delete_item(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
) -> Result<Response> {
    core::inventory::deactivate_item(&state.db, item_id).await?;
    Ok(message_only("Inventory item removed"))
}

/// `PATCH /api/inventory/:id/stock`
pub async fn update_stock(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
    Json(request): Json<StockUpdateRequest>,
) -> Result<Response> {
    let item = core::inventory::update_stock_level(
        &state.db,
        item_id,
        request.quantity,
        request.operation,
        request.note,
        request.updated_by,
    )
    .await?;

    Ok(ApiResponse::ok(InventoryItemResponse::from(item)))
}

/// `GET /api/inventory/:id/history`
pub async fn stock_history(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
) -> Result<Response> {
    // The ledger of a soft-deleted item stays readable; only the item
    // itself is hidden.
    let history = core::stock_ledger::get_history_for_item(&state.db, item_id).await?;
    Ok(ApiResponse::ok(history))
}
