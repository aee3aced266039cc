//! Stock ledger - The append-only history of stock quantity changes.
//!
//! Every stock movement appends one record; records are never mutated or
//! deleted by the system. The ledger is written best-effort by the inventory
//! operations: a failed append is logged by the caller and never rolls back
//! the stock mutation itself.

use crate::{
    entities::{
        StockUpdate,
        stock_update::{self, StockUpdateType},
    },
    errors::Result,
};
use sea_orm::{ConnectionTrait, QueryOrder, Set, prelude::*};

/// Appends one record to the stock ledger.
///
/// The quantity is stored as an absolute value; the direction of the
/// movement is carried by `update_type` and the previous/new stock pair.
pub async fn append_stock_update<C>(
    db: &C,
    inventory_item_id: i64,
    update_type: StockUpdateType,
    quantity: f64,
    previous_stock: f64,
    new_stock: f64,
    note: Option<String>,
    updated_by: Option<String>,
) -> Result<stock_update::Model>
where
    C: ConnectionTrait,
{
    let record = stock_update::ActiveModel {
        inventory_item_id: Set(inventory_item_id),
        update_type: Set(update_type),
        quantity: Set(quantity.abs()),
        previous_stock: Set(previous_stock),
        new_stock: Set(new_stock),
        note: Set(note),
        updated_by: Set(updated_by),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    record.insert(db).await.map_err(Into::into)
}

/// Retrieves the ledger history for an inventory item, newest first.
pub async fn get_history_for_item(
    db: &DatabaseConnection,
    inventory_item_id: i64,
) -> Result<Vec<stock_update::Model>> {
    StockUpdate::find()
        .filter(stock_update::Column::InventoryItemId.eq(inventory_item_id))
        .order_by_desc(stock_update::Column::CreatedAt)
        .order_by_desc(stock_update::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_append_stores_absolute_quantity() -> Result<()> {
        let (db, item) = setup_with_inventory_item().await?;

        let record = append_stock_update(
            &db,
            item.id,
            StockUpdateType::UseStock,
            -7.5,
            20.0,
            12.5,
            Some("dinner service".to_string()),
            Some("admin".to_string()),
        )
        .await?;

        assert_eq!(record.quantity, 7.5);
        assert_eq!(record.previous_stock, 20.0);
        assert_eq!(record.new_stock, 12.5);
        assert_eq!(record.update_type, StockUpdateType::UseStock);

        Ok(())
    }

    #[tokio::test]
    async fn test_history_newest_first_per_item() -> Result<()> {
        let db = setup_test_db().await?;

        let rice = create_test_inventory_item(&db, "Basmati Rice").await?;
        let chicken = create_test_inventory_item(&db, "Chicken").await?;

        append_stock_update(&db, rice.id, StockUpdateType::AddStock, 10.0, 20.0, 30.0, None, None)
            .await?;
        append_stock_update(&db, rice.id, StockUpdateType::UseStock, 5.0, 30.0, 25.0, None, None)
            .await?;
        append_stock_update(
            &db,
            chicken.id,
            StockUpdateType::AddStock,
            3.0,
            20.0,
            23.0,
            None,
            None,
        )
        .await?;

        let history = get_history_for_item(&db, rice.id).await?;
        assert_eq!(history.len(), 2);
        // Newest first
        assert_eq!(history[0].update_type, StockUpdateType::UseStock);
        assert_eq!(history[1].update_type, StockUpdateType::AddStock);
        // Other items' records excluded
        assert!(history.iter().all(|r| r.inventory_item_id == rice.id));

        Ok(())
    }
}
