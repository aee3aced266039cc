//! Contact form endpoints - the public submit and the admin inbox.

use axum::{Json, extract::State, response::Response};
use serde::Deserialize;

use crate::{
    api::{AppState, response::ApiResponse},
    core,
    errors::Result,
};

/// Request contract for a contact-form submission.
#[derive(Debug, Deserialize)]
pub struct CreateContactRequest {
    /// Name of the sender
    pub name: String,
    /// Email address for the reply
    pub email: String,
    /// Phone number, if provided
    #[serde(default)]
    pub phone: Option<String>,
    /// Subject line
    pub subject: String,
    /// Message body
    pub message: String,
}

/// `POST /api/contact`
pub async fn create_message(
    State(state): State<AppState>,
    Json(request): Json<CreateContactRequest>,
) -> Result<Response> {
    let message = core::contact::create_message(
        &state.db,
        request.name,
        request.email,
        request.phone,
        request.subject,
        request.message,
    )
    .await?;

    Ok(ApiResponse::created(message))
}

/// `GET /api/contact`
pub async fn list_messages(State(state): State<AppState>) -> Result<Response> {
    let messages = core::contact::get_all_messages(&state.db).await?;
    Ok(ApiResponse::ok(messages))
}
