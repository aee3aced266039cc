//! Inventory business logic - Item CRUD and stock-level updates.
//!
//! Stock updates follow the documented two-step shape: the item mutation is
//! persisted first, then a ledger record is appended best-effort. A failed
//! ledger append is logged and swallowed - the stock change is never rolled
//! back, so the ledger can lag the true history. Concurrent updates to the
//! same item are not serialized; the unique-index-free read-modify-write
//! can lose updates under contention.

use crate::{
    core::stock_ledger,
    entities::{
        InventoryItem,
        inventory_item::{self, InventoryCategory, InventoryUnit},
        stock_update::StockUpdateType,
    },
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::error;

/// Direction of a stock-level update request.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockOperation {
    /// Increase stock (delivery, restock)
    Add,
    /// Decrease stock (kitchen use, wastage), clamped at zero
    Subtract,
}

/// Optional fields for an item update; `None` leaves the stored value alone.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ItemUpdate {
    /// New item name
    pub name: Option<String>,
    /// New category
    pub category: Option<InventoryCategory>,
    /// Direct stock correction; recorded as an ADJUSTMENT ledger entry
    pub current_stock: Option<f64>,
    /// New low-stock threshold
    pub min_stock_level: Option<f64>,
    /// New overstock threshold
    pub max_stock_level: Option<f64>,
    /// New unit of measure
    pub unit: Option<InventoryUnit>,
    /// New cost per unit
    pub cost_per_unit: Option<f64>,
    /// Note attached to the adjustment ledger entry, if any
    pub note: Option<String>,
    /// Who performed the change
    pub updated_by: Option<String>,
}

/// Retrieves all active inventory items, ordered alphabetically by name.
pub async fn get_all_active_items(db: &DatabaseConnection) -> Result<Vec<inventory_item::Model>> {
    InventoryItem::find()
        .filter(inventory_item::Column::IsActive.eq(true))
        .order_by_asc(inventory_item::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds an active inventory item by its unique ID.
///
/// Soft-deleted items are not accessible through this lookup.
pub async fn get_item_by_id(
    db: &DatabaseConnection,
    item_id: i64,
) -> Result<Option<inventory_item::Model>> {
    InventoryItem::find_by_id(item_id)
        .filter(inventory_item::Column::IsActive.eq(true))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new inventory item, performing input validation.
///
/// # Errors
/// Returns an error if:
/// - The name is empty or whitespace-only
/// - Any quantity or cost is negative or not finite
/// - The overstock threshold does not exceed the low-stock threshold
/// - The database insert fails
pub async fn create_item(
    db: &DatabaseConnection,
    name: String,
    category: InventoryCategory,
    current_stock: f64,
    min_stock_level: f64,
    max_stock_level: f64,
    unit: InventoryUnit,
    cost_per_unit: f64,
) -> Result<inventory_item::Model> {
    // Validate inputs
    if name.trim().is_empty() {
        return Err(Error::Validation {
            message: "Inventory item name cannot be empty".to_string(),
        });
    }

    for value in [current_stock, min_stock_level, max_stock_level, cost_per_unit] {
        if value < 0.0 || !value.is_finite() {
            return Err(Error::InvalidAmount { amount: value });
        }
    }

    if max_stock_level <= min_stock_level {
        return Err(Error::Validation {
            message: "Maximum stock level must be greater than the minimum".to_string(),
        });
    }

    let now = chrono::Utc::now();

    let item = inventory_item::ActiveModel {
        name: Set(name.trim().to_string()),
        category: Set(category),
        current_stock: Set(current_stock),
        min_stock_level: Set(min_stock_level),
        max_stock_level: Set(max_stock_level),
        unit: Set(unit),
        cost_per_unit: Set(cost_per_unit),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    item.insert(db).await.map_err(Into::into)
}

/// Updates an existing item's details, applying only the provided fields.
///
/// A direct edit of `current_stock` is written through and recorded as an
/// ADJUSTMENT ledger entry under the same best-effort policy as the
/// add/subtract operations.
///
/// # Errors
/// Returns an error if the item does not exist, a provided value fails
/// validation, or the database update fails.
pub async fn update_item(
    db: &DatabaseConnection,
    item_id: i64,
    update: ItemUpdate,
) -> Result<inventory_item::Model> {
    let item = get_item_by_id(db, item_id)
        .await?
        .ok_or(Error::InventoryItemNotFound { id: item_id })?;

    if let Some(ref name) = update.name {
        if name.trim().is_empty() {
            return Err(Error::Validation {
                message: "Inventory item name cannot be empty".to_string(),
            });
        }
    }

    for value in [
        update.current_stock,
        update.min_stock_level,
        update.max_stock_level,
        update.cost_per_unit,
    ]
    .into_iter()
    .flatten()
    {
        if value < 0.0 || !value.is_finite() {
            return Err(Error::InvalidAmount { amount: value });
        }
    }

    let previous_stock = item.current_stock;
    let stock_correction = update
        .current_stock
        .filter(|new| (new - previous_stock).abs() > f64::EPSILON);

    let mut active_model: inventory_item::ActiveModel = item.into();
    if let Some(name) = update.name {
        active_model.name = Set(name.trim().to_string());
    }
    if let Some(category) = update.category {
        active_model.category = Set(category);
    }
    if let Some(new_stock) = stock_correction {
        active_model.current_stock = Set(new_stock);
    }
    if let Some(min) = update.min_stock_level {
        active_model.min_stock_level = Set(min);
    }
    if let Some(max) = update.max_stock_level {
        active_model.max_stock_level = Set(max);
    }
    if let Some(unit) = update.unit {
        active_model.unit = Set(unit);
    }
    if let Some(cost) = update.cost_per_unit {
        active_model.cost_per_unit = Set(cost);
    }
    active_model.updated_at = Set(chrono::Utc::now());

    let updated = active_model.update(db).await?;

    if let Some(new_stock) = stock_correction {
        // Best-effort audit append: failure is logged, never rolled back.
        if let Err(e) = stock_ledger::append_stock_update(
            db,
            item_id,
            StockUpdateType::Adjustment,
            new_stock - previous_stock,
            previous_stock,
            new_stock,
            update.note,
            update.updated_by,
        )
        .await
        {
            error!("Failed to append ADJUSTMENT ledger record for item {item_id}: {e}");
        }
    }

    Ok(updated)
}

/// Soft-deletes an inventory item by clearing its `is_active` flag.
///
/// # Errors
/// Returns an error if the item does not exist or the update fails.
pub async fn deactivate_item(db: &DatabaseConnection, item_id: i64) -> Result<()> {
    let item = get_item_by_id(db, item_id)
        .await?
        .ok_or(Error::InventoryItemNotFound { id: item_id })?;

    let mut active_model: inventory_item::ActiveModel = item.into();
    active_model.is_active = Set(false);
    active_model.updated_at = Set(chrono::Utc::now());
    active_model.update(db).await?;

    Ok(())
}

/// Adjusts an item's stock level by a positive quantity in the requested
/// direction and appends the matching ledger record.
///
/// Subtraction clamps at zero rather than going negative. The item mutation
/// is persisted first; the ledger append is best-effort - on failure it is
/// logged and the already-persisted stock change stands.
///
/// # Errors
/// Returns an error if:
/// - The quantity is not strictly positive and finite
/// - The item does not exist or is inactive
/// - The database update of the item fails
pub async fn update_stock_level(
    db: &DatabaseConnection,
    item_id: i64,
    quantity: f64,
    operation: StockOperation,
    note: Option<String>,
    updated_by: Option<String>,
) -> Result<inventory_item::Model> {
    if quantity <= 0.0 || !quantity.is_finite() {
        return Err(Error::InvalidAmount { amount: quantity });
    }

    let item = get_item_by_id(db, item_id)
        .await?
        .ok_or(Error::InventoryItemNotFound { id: item_id })?;

    let previous_stock = item.current_stock;
    let (new_stock, update_type) = match operation {
        StockOperation::Add => (previous_stock + quantity, StockUpdateType::AddStock),
        StockOperation::Subtract => (
            (previous_stock - quantity).max(0.0),
            StockUpdateType::UseStock,
        ),
    };

    let mut active_model: inventory_item::ActiveModel = item.into();
    active_model.current_stock = Set(new_stock);
    active_model.updated_at = Set(chrono::Utc::now());
    let updated = active_model.update(db).await?;

    // Best-effort audit append: failure is logged, never rolled back.
    if let Err(e) = stock_ledger::append_stock_update(
        db,
        item_id,
        update_type,
        quantity,
        previous_stock,
        new_stock,
        note,
        updated_by,
    )
    .await
    {
        error!("Failed to append stock ledger record for item {item_id}: {e}");
    }

    Ok(updated)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::{entities::inventory_item::StockStatus, test_utils::*};

    #[tokio::test]
    async fn test_create_item_validation() -> Result<()> {
        // Validation fires before any query, so an empty connection suffices
        let db = setup_test_db().await?;

        let result = create_item(
            &db,
            "  ".to_string(),
            InventoryCategory::Grains,
            10.0,
            5.0,
            50.0,
            InventoryUnit::Kg,
            250.0,
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::Validation { message: _ }
        ));

        let result = create_item(
            &db,
            "Basmati Rice".to_string(),
            InventoryCategory::Grains,
            -1.0,
            5.0,
            50.0,
            InventoryUnit::Kg,
            250.0,
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidAmount { amount: -1.0 }
        ));

        // max must exceed min
        let result = create_item(
            &db,
            "Basmati Rice".to_string(),
            InventoryCategory::Grains,
            10.0,
            50.0,
            50.0,
            InventoryUnit::Kg,
            250.0,
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::Validation { message: _ }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_stock_status_boundaries() -> Result<()> {
        let db = setup_test_db().await?;

        // min 5, max 50
        let item = create_custom_inventory_item(
            &db,
            "Basmati Rice",
            InventoryCategory::Grains,
            10.0,
            5.0,
            50.0,
            InventoryUnit::Kg,
            250.0,
        )
        .await?;
        assert_eq!(item.stock_status(), StockStatus::InStock);

        // Exactly at the minimum counts as low stock
        let low = update_item(
            &db,
            item.id,
            ItemUpdate {
                current_stock: Some(5.0),
                ..Default::default()
            },
        )
        .await?;
        assert_eq!(low.stock_status(), StockStatus::LowStock);

        // Exactly at the maximum counts as overstocked
        let high = update_item(
            &db,
            item.id,
            ItemUpdate {
                current_stock: Some(50.0),
                ..Default::default()
            },
        )
        .await?;
        assert_eq!(high.stock_status(), StockStatus::Overstocked);

        // Zero is out of stock, taking precedence over low stock
        let empty = update_item(
            &db,
            item.id,
            ItemUpdate {
                current_stock: Some(0.0),
                ..Default::default()
            },
        )
        .await?;
        assert_eq!(empty.stock_status(), StockStatus::OutOfStock);

        Ok(())
    }

    #[tokio::test]
    async fn test_total_value() -> Result<()> {
        let (db, _) = setup_with_inventory_item().await?;

        let item = create_custom_inventory_item(
            &db,
            "Chicken",
            InventoryCategory::Meat,
            12.0,
            5.0,
            40.0,
            InventoryUnit::Kg,
            1_450.0,
        )
        .await?;

        assert_eq!(item.total_value(), 17_400.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_add_stock_appends_ledger() -> Result<()> {
        let (db, item) = setup_with_inventory_item().await?;
        assert_eq!(item.current_stock, 20.0);

        let updated = update_stock_level(
            &db,
            item.id,
            10.0,
            StockOperation::Add,
            Some("weekly delivery".to_string()),
            Some("admin".to_string()),
        )
        .await?;
        assert_eq!(updated.current_stock, 30.0);

        let history = crate::core::stock_ledger::get_history_for_item(&db, item.id).await?;
        assert_eq!(history.len(), 1);
        assert_eq!(
            history[0].update_type,
            crate::entities::stock_update::StockUpdateType::AddStock
        );
        assert_eq!(history[0].quantity, 10.0);
        assert_eq!(history[0].previous_stock, 20.0);
        assert_eq!(history[0].new_stock, 30.0);
        assert_eq!(history[0].note, Some("weekly delivery".to_string()));

        Ok(())
    }

    #[tokio::test]
    async fn test_subtract_clamps_at_zero() -> Result<()> {
        let db = setup_test_db().await?;

        let item = create_custom_inventory_item(
            &db,
            "Coconut Milk",
            InventoryCategory::Dairy,
            3.0,
            2.0,
            30.0,
            InventoryUnit::L,
            600.0,
        )
        .await?;

        // Subtracting more than available clamps to zero, not -2
        let updated =
            update_stock_level(&db, item.id, 5.0, StockOperation::Subtract, None, None).await?;
        assert_eq!(updated.current_stock, 0.0);
        assert_eq!(updated.stock_status(), StockStatus::OutOfStock);

        // Ledger still records the requested absolute quantity with the real before/after
        let history = crate::core::stock_ledger::get_history_for_item(&db, item.id).await?;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].quantity, 5.0);
        assert_eq!(history[0].previous_stock, 3.0);
        assert_eq!(history[0].new_stock, 0.0);
        assert_eq!(
            history[0].update_type,
            crate::entities::stock_update::StockUpdateType::UseStock
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_update_stock_level_validation() -> Result<()> {
        let (db, item) = setup_with_inventory_item().await?;

        for bad in [0.0, -4.0, f64::NAN, f64::INFINITY] {
            let result =
                update_stock_level(&db, item.id, bad, StockOperation::Add, None, None).await;
            assert!(matches!(result.unwrap_err(), Error::InvalidAmount { .. }));
        }

        let result = update_stock_level(&db, 999, 5.0, StockOperation::Add, None, None).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InventoryItemNotFound { id: 999 }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_direct_stock_edit_records_adjustment() -> Result<()> {
        let (db, item) = setup_with_inventory_item().await?;

        let updated = update_item(
            &db,
            item.id,
            ItemUpdate {
                current_stock: Some(17.5),
                note: Some("stocktake correction".to_string()),
                ..Default::default()
            },
        )
        .await?;
        assert_eq!(updated.current_stock, 17.5);

        let history = crate::core::stock_ledger::get_history_for_item(&db, item.id).await?;
        assert_eq!(history.len(), 1);
        assert_eq!(
            history[0].update_type,
            crate::entities::stock_update::StockUpdateType::Adjustment
        );
        assert_eq!(history[0].previous_stock, 20.0);
        assert_eq!(history[0].new_stock, 17.5);
        assert_eq!(history[0].quantity, 2.5);

        // Updating without touching stock appends nothing
        update_item(
            &db,
            item.id,
            ItemUpdate {
                cost_per_unit: Some(300.0),
                ..Default::default()
            },
        )
        .await?;
        let history = crate::core::stock_ledger::get_history_for_item(&db, item.id).await?;
        assert_eq!(history.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_soft_delete_hides_item() -> Result<()> {
        let (db, item) = setup_with_inventory_item().await?;

        deactivate_item(&db, item.id).await?;

        assert!(get_item_by_id(&db, item.id).await?.is_none());
        assert!(get_all_active_items(&db).await?.is_empty());

        // Stock operations refuse deactivated items
        let result =
            update_stock_level(&db, item.id, 1.0, StockOperation::Add, None, None).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InventoryItemNotFound { .. }
        ));

        Ok(())
    }
}
