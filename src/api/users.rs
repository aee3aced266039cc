//! Mirrored user endpoints - profile reads and locally-owned updates.
//!
//! Creation and deletion of users happen exclusively through the
//! identity-provider webhook; these endpoints only expose the mirror.

use axum::{
    Json,
    extract::{Path, State},
    response::Response,
};
use serde::Deserialize;

use crate::{
    api::{AppState, response::ApiResponse},
    core,
    errors::{Error, Result},
};

/// Request contract for updating the locally-owned profile fields.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    /// New display name
    #[serde(default)]
    pub name: Option<String>,
    /// New delivery address
    #[serde(default)]
    pub address: Option<String>,
}

/// `GET /api/user/:clerk_id`
pub async fn get_user(
    State(state): State<AppState>,
    Path(clerk_id): Path<String>,
) -> Result<Response> {
    let user = core::user::get_by_clerk_id(&state.db, &clerk_id)
        .await?
        .ok_or(Error::UserNotFound { clerk_id })?;
    Ok(ApiResponse::ok(user))
}

/// `PUT /api/user/:clerk_id`
pub async fn update_user(
    State(state): State<AppState>,
    Path(clerk_id): Path<String>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Response> {
    let user =
        core::user::update_profile(&state.db, &clerk_id, request.name, request.address).await?;
    Ok(ApiResponse::ok(user))
}
