//! Uniform JSON response envelope.
//!
//! Every successful response is `{ "success": true, "data": ..., }` with an
//! optional advisory `message`; errors produce `{ "success": false,
//! "error": ... }` via the `IntoResponse` impl on [`crate::errors::Error`].

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Success envelope wrapping a payload of type `T`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Always `true`; failures never construct this type
    pub success: bool,
    /// The response payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Optional advisory message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 with a payload.
    pub fn ok(data: T) -> Response {
        Json(Self {
            success: true,
            data: Some(data),
            message: None,
        })
        .into_response()
    }

    /// 201 with a payload.
    pub fn created(data: T) -> Response {
        (
            StatusCode::CREATED,
            Json(Self {
                success: true,
                data: Some(data),
                message: None,
            }),
        )
            .into_response()
    }

    /// 200 with a payload and an advisory message.
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Response {
        Json(Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        })
        .into_response()
    }
}

/// 200 with no payload, only an advisory message.
pub fn message_only(message: impl Into<String>) -> Response {
    Json(ApiResponse::<()> {
        success: true,
        data: None,
        message: Some(message.into()),
    })
    .into_response()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_envelope_shape() {
        let envelope = ApiResponse {
            success: true,
            data: Some(serde_json::json!({"id": 1})),
            message: None,
        };
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "data": {"id": 1}}));
    }

    #[test]
    fn test_envelope_skips_empty_fields() {
        let envelope = ApiResponse::<()> {
            success: true,
            data: None,
            message: Some("done".to_string()),
        };
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "message": "done"}));
    }
}
