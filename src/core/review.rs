//! Review business logic - Eligibility gate and review management.
//!
//! A review is allowed only for a completed order owned by the requester
//! that has not been reviewed yet. [`can_review`] answers the probe the
//! frontend uses to show or hide the review form; [`create_review`]
//! re-checks all four conditions before inserting (the form check and the
//! submit can race), and the unique index on `order_id` is the final
//! backstop against duplicate reviews under concurrent requests.

use crate::{
    entities::{
        Review,
        order::{self, OrderStatus},
        review,
    },
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Checks whether `user_id` may review `order_id`.
///
/// # Errors
/// Returns the specific refusal:
/// - [`Error::OrderNotFound`] - the order does not exist
/// - [`Error::NotOrderOwner`] - the order belongs to someone else
/// - [`Error::OrderNotCompleted`] - the order has not reached `completed`
/// - [`Error::AlreadyReviewed`] - a review already exists for the order
pub async fn can_review(db: &DatabaseConnection, order_id: i64, user_id: &str) -> Result<()> {
    let order = crate::core::order::get_order_by_id(db, order_id)
        .await?
        .ok_or(Error::OrderNotFound { id: order_id })?;

    if order.user_id != user_id {
        return Err(Error::NotOrderOwner { order_id });
    }

    if order.status != OrderStatus::Completed {
        return Err(Error::OrderNotCompleted {
            order_id,
            status: order.status,
        });
    }

    let existing = Review::find()
        .filter(review::Column::OrderId.eq(order_id))
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(Error::AlreadyReviewed { order_id });
    }

    Ok(())
}

/// Creates a review for a completed order, snapshotting the order's items
/// and total so later changes never alter what the review describes.
///
/// # Errors
/// Returns an error if the rating is outside 1-5, the comment is empty,
/// any eligibility condition fails, or the database insert fails.
pub async fn create_review(
    db: &DatabaseConnection,
    order_id: i64,
    user_id: String,
    rating: i32,
    comment: String,
    user_name: String,
) -> Result<review::Model> {
    if !(1..=5).contains(&rating) {
        return Err(Error::InvalidRating { rating });
    }

    if comment.trim().is_empty() {
        return Err(Error::Validation {
            message: "Review comment cannot be empty".to_string(),
        });
    }

    // Re-validate eligibility; the unique index on order_id catches the
    // remaining race between this check and the insert.
    can_review(db, order_id, &user_id).await?;

    let order: order::Model = crate::core::order::get_order_by_id(db, order_id)
        .await?
        .ok_or(Error::OrderNotFound { id: order_id })?;

    let now = chrono::Utc::now();

    let model = review::ActiveModel {
        user_id: Set(user_id),
        order_id: Set(order_id),
        rating: Set(rating),
        comment: Set(comment.trim().to_string()),
        user_name: Set(user_name),
        order_items: Set(order.menu_items),
        order_total: Set(order.total),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    model.insert(db).await.map_err(Into::into)
}

/// Retrieves all reviews, newest first.
pub async fn get_all_reviews(db: &DatabaseConnection) -> Result<Vec<review::Model>> {
    Review::find()
        .order_by_desc(review::Column::CreatedAt)
        .order_by_desc(review::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the reviews written by one user, newest first.
pub async fn get_reviews_for_user(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<Vec<review::Model>> {
    Review::find()
        .filter(review::Column::UserId.eq(user_id))
        .order_by_desc(review::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Removes a review. Admin-side moderation only; customers cannot edit or
/// retract reviews through the public surface.
///
/// # Errors
/// Returns an error if the review does not exist or the delete fails.
pub async fn delete_review(db: &DatabaseConnection, review_id: i64) -> Result<()> {
    let review = Review::find_by_id(review_id)
        .one(db)
        .await?
        .ok_or(Error::ReviewNotFound { id: review_id })?;

    review.delete(db).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_review_requires_completed_order() -> Result<()> {
        let db = setup_test_db_with_open_menu().await?;
        let order = create_test_order(&db, "user_2abc").await?;

        // Pending order: not eligible
        let result = can_review(&db, order.id, "user_2abc").await;
        assert!(matches!(
            result.unwrap_err(),
            Error::OrderNotCompleted {
                status: OrderStatus::Pending,
                ..
            }
        ));

        // Completed order: eligible
        let order = complete_order(&db, order.id).await?;
        can_review(&db, order.id, "user_2abc").await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_review_requires_ownership() -> Result<()> {
        let db = setup_test_db_with_open_menu().await?;
        let order = create_test_order(&db, "user_2abc").await?;
        complete_order(&db, order.id).await?;

        let result = can_review(&db, order.id, "user_intruder").await;
        assert!(matches!(result.unwrap_err(), Error::NotOrderOwner { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_review_unknown_order() -> Result<()> {
        let db = setup_test_db().await?;

        let result = can_review(&db, 999, "user_2abc").await;
        assert!(matches!(
            result.unwrap_err(),
            Error::OrderNotFound { id: 999 }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_review_snapshots_order() -> Result<()> {
        let db = setup_test_db_with_open_menu().await?;
        let order = create_test_order(&db, "user_2abc").await?;
        complete_order(&db, order.id).await?;

        let review = create_review(
            &db,
            order.id,
            "user_2abc".to_string(),
            5,
            "Best rice and curry in town".to_string(),
            "Kasun".to_string(),
        )
        .await?;

        assert_eq!(review.rating, 5);
        assert_eq!(review.order_items, order.menu_items);
        assert_eq!(review.order_total, order.total);
        assert_eq!(review.user_name, "Kasun");

        Ok(())
    }

    #[tokio::test]
    async fn test_second_review_for_same_order_rejected() -> Result<()> {
        let db = setup_test_db_with_open_menu().await?;
        let order = create_test_order(&db, "user_2abc").await?;
        complete_order(&db, order.id).await?;

        create_review(
            &db,
            order.id,
            "user_2abc".to_string(),
            4,
            "Very good".to_string(),
            "Kasun".to_string(),
        )
        .await?;

        let result = create_review(
            &db,
            order.id,
            "user_2abc".to_string(),
            5,
            "Changed my mind, excellent".to_string(),
            "Kasun".to_string(),
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::AlreadyReviewed { .. }));

        // The probe agrees
        let result = can_review(&db, order.id, "user_2abc").await;
        assert!(matches!(result.unwrap_err(), Error::AlreadyReviewed { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_review_validation() -> Result<()> {
        let db = setup_test_db_with_open_menu().await?;
        let order = create_test_order(&db, "user_2abc").await?;
        complete_order(&db, order.id).await?;

        for rating in [0, 6, -1] {
            let result = create_review(
                &db,
                order.id,
                "user_2abc".to_string(),
                rating,
                "comment".to_string(),
                "Kasun".to_string(),
            )
            .await;
            assert!(matches!(result.unwrap_err(), Error::InvalidRating { .. }));
        }

        let result = create_review(
            &db,
            order.id,
            "user_2abc".to_string(),
            4,
            "   ".to_string(),
            "Kasun".to_string(),
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::Validation { message: _ }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_review() -> Result<()> {
        let db = setup_test_db_with_open_menu().await?;
        let order = create_test_order(&db, "user_2abc").await?;
        complete_order(&db, order.id).await?;

        let review = create_review(
            &db,
            order.id,
            "user_2abc".to_string(),
            3,
            "Average".to_string(),
            "Kasun".to_string(),
        )
        .await?;

        delete_review(&db, review.id).await?;
        assert!(get_all_reviews(&db).await?.is_empty());

        // The order becomes reviewable again once the review is moderated away
        can_review(&db, order.id, "user_2abc").await?;

        let result = delete_review(&db, review.id).await;
        assert!(matches!(result.unwrap_err(), Error::ReviewNotFound { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_reviews_for_user() -> Result<()> {
        let db = setup_test_db_with_open_menu().await?;

        for user in ["user_2abc", "user_other"] {
            let order = create_test_order(&db, user).await?;
            complete_order(&db, order.id).await?;
            create_review(
                &db,
                order.id,
                user.to_string(),
                4,
                "Good".to_string(),
                "Someone".to_string(),
            )
            .await?;
        }

        let mine = get_reviews_for_user(&db, "user_2abc").await?;
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].user_id, "user_2abc");

        assert_eq!(get_all_reviews(&db).await?.len(), 2);

        Ok(())
    }
}
