//! Identity-provider webhook endpoint.
//!
//! Deliveries are signed Svix-style: an HMAC-SHA256 over
//! `"{id}.{timestamp}.{body}"` with the base64 secret that follows the
//! `whsec_` prefix, carried in three required headers. The payload is never
//! parsed before the signature verifies. Event handling itself is
//! idempotent, so redeliveries are harmless.

use axum::{extract::State, http::HeaderMap, response::Response};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;
use tracing::info;

use crate::{
    api::{AppState, response::message_only},
    core,
    errors::{Error, Result},
};

type HmacSha256 = Hmac<Sha256>;

const HEADER_ID: &str = "svix-id";
const HEADER_TIMESTAMP: &str = "svix-timestamp";
const HEADER_SIGNATURE: &str = "svix-signature";

/// An identity-provider event envelope.
#[derive(Debug, Deserialize)]
pub struct WebhookEvent {
    /// Event name, e.g. `user.created`
    #[serde(rename = "type")]
    pub event_type: String,
    /// The affected user
    pub data: WebhookUserData,
}

/// The user payload inside an identity event. Delete events carry only the
/// id, so everything else is optional.
#[derive(Debug, Deserialize)]
pub struct WebhookUserData {
    /// Provider user id
    pub id: String,
    /// Given name, if set
    #[serde(default)]
    pub first_name: Option<String>,
    /// Family name, if set
    #[serde(default)]
    pub last_name: Option<String>,
    /// The user's email addresses; the first entry is primary
    #[serde(default)]
    pub email_addresses: Vec<WebhookEmail>,
}

/// One email address entry in the provider payload.
#[derive(Debug, Deserialize)]
pub struct WebhookEmail {
    /// The address itself
    pub email_address: String,
}

/// Verifies a delivery signature against the configured secret.
///
/// The signature header carries space-separated `v1,<base64>` candidates;
/// verification succeeds if any candidate matches. Comparison happens via
/// `Mac::verify_slice`, which is constant-time.
///
/// # Errors
/// Returns [`Error::InvalidWebhookSignature`] when the secret does not
/// decode or no candidate matches.
pub fn verify_webhook_signature(
    secret: &str,
    message_id: &str,
    timestamp: &str,
    payload: &[u8],
    signature_header: &str,
) -> Result<()> {
    let encoded_key = secret.strip_prefix("whsec_").unwrap_or(secret);
    let key = BASE64
        .decode(encoded_key)
        .map_err(|_| Error::InvalidWebhookSignature)?;

    for candidate in signature_header.split_whitespace() {
        let Some(signature) = candidate.strip_prefix("v1,") else {
            continue;
        };
        let Ok(signature) = BASE64.decode(signature) else {
            continue;
        };

        let mut mac =
            HmacSha256::new_from_slice(&key).map_err(|_| Error::InvalidWebhookSignature)?;
        mac.update(message_id.as_bytes());
        mac.update(b".");
        mac.update(timestamp.as_bytes());
        mac.update(b".");
        mac.update(payload);

        if mac.verify_slice(&signature).is_ok() {
            return Ok(());
        }
    }

    Err(Error::InvalidWebhookSignature)
}

fn required_header<'a>(headers: &'a HeaderMap, name: &'static str) -> Result<&'a str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .ok_or(Error::MissingWebhookHeader { name })
}

/// Assembles a display name from the provider's first/last name fields.
fn display_name(data: &WebhookUserData) -> String {
    let name = [data.first_name.as_deref(), data.last_name.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");

    if name.is_empty() {
        data.id.clone()
    } else {
        name
    }
}

/// `POST /api/user/webhook`
pub async fn handle_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Result<Response> {
    let secret = state
        .config
        .webhook_secret
        .as_deref()
        .ok_or_else(|| Error::Config {
            message: "CLERK_WEBHOOK_SECRET is not configured".to_string(),
        })?;

    let message_id = required_header(&headers, HEADER_ID)?;
    let timestamp = required_header(&headers, HEADER_TIMESTAMP)?;
    let signature = required_header(&headers, HEADER_SIGNATURE)?;

    verify_webhook_signature(secret, message_id, timestamp, body.as_bytes(), signature)?;

    let event: WebhookEvent = serde_json::from_str(&body)?;

    match event.event_type.as_str() {
        "user.created" | "user.updated" => {
            let name = display_name(&event.data);
            let email = event
                .data
                .email_addresses
                .first()
                .map(|entry| entry.email_address.clone())
                .ok_or_else(|| Error::Validation {
                    message: "Identity event carries no email address".to_string(),
                })?;

            core::user::upsert_from_identity(&state.db, event.data.id, name, email).await?;
            Ok(message_only("User synchronized"))
        }
        "user.deleted" => {
            core::user::delete_by_clerk_id(&state.db, &event.data.id).await?;
            Ok(message_only("User removed"))
        }
        other => {
            // Unknown event kinds are acknowledged so the provider stops
            // redelivering them.
            info!("Ignoring unhandled identity event type: {other}");
            Ok(message_only("Event ignored"))
        }
    }
}
