//! Review endpoints - the eligibility probe and review CRUD.

use axum::{
    Json,
    extract::{Path, Query, State},
    response::Response,
};
use serde::{Deserialize, Serialize};

use crate::{
    api::{AppState, response::{ApiResponse, message_only}},
    core,
    errors::{Error, Result},
};

/// Request contract for creating a review.
#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    /// The completed order being reviewed
    pub order_id: i64,
    /// Identity-provider id of the reviewer
    pub user_id: String,
    /// Star rating, 1 through 5
    pub rating: i32,
    /// Review text
    pub comment: String,
    /// Display name shown with the review
    pub user_name: String,
}

/// Query contract for the eligibility probe.
#[derive(Debug, Deserialize)]
pub struct CanReviewQuery {
    /// The order to check
    pub order_id: i64,
    /// The prospective reviewer
    pub user_id: String,
}

/// Response of the eligibility probe.
#[derive(Debug, Serialize)]
pub struct CanReviewResponse {
    /// Whether a review may be created now
    pub can_review: bool,
    /// Why not, when `can_review` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// `POST /api/reviews`
pub async fn create_review(
    State(state): State<AppState>,
    Json(request): Json<CreateReviewRequest>,
) -> Result<Response> {
    let review = core::review::create_review(
        &state.db,
        request.order_id,
        request.user_id,
        request.rating,
        request.comment,
        request.user_name,
    )
    .await?;

    Ok(ApiResponse::created(review))
}

/// `GET /api/reviews`
pub async fn list_reviews(State(state): State<AppState>) -> Result<Response> {
    let reviews = core::review::get_all_reviews(&state.db).await?;
    Ok(ApiResponse::ok(reviews))
}

/// `GET /api/reviews/can-review?order_id=&user_id=`
///
/// The probe is advisory: an ineligible order answers `can_review: false`
/// with the reason rather than an error status, so the frontend can simply
/// hide the review form.
pub async fn can_review(
    State(state): State<AppState>,
    Query(query): Query<CanReviewQuery>,
) -> Result<Response> {
    let response = match core::review::can_review(&state.db, query.order_id, &query.user_id).await
    {
        Ok(()) => CanReviewResponse {
            can_review: true,
            reason: None,
        },
        Err(
            refusal @ (Error::OrderNotFound { .. }
            | Error::NotOrderOwner { .. }
            | Error::OrderNotCompleted { .. }
            | Error::AlreadyReviewed { .. }),
        ) => CanReviewResponse {
            can_review: false,
            reason: Some(refusal.to_string()),
        },
        Err(other) => return Err(other),
    };

    Ok(ApiResponse::ok(response))
}

/// `DELETE /api/reviews/:id`
pub async fn delete_review(
    State(state): State<AppState>,
    Path(review_id): Path<i64>,
) -> Result<Response> {
    core::review::delete_review(&state.db, review_id).await?;
    Ok(message_only("Review removed"))
}
