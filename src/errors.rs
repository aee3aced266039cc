//! Unified error handling for the Rajapaksha Foods backend.
//!
//! All fallible operations in the crate return [`Result`] with this module's
//! [`Error`] enum. The HTTP layer relies on the [`IntoResponse`] impl to map
//! each variant to a conventional status code and the standard
//! `{ success: false, error }` JSON envelope.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde_json::json;
use thiserror::Error;

use crate::entities::order::OrderStatus;

/// Top-level error type for all backend operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration loading or parsing failure
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what went wrong
        message: String,
    },

    /// Request payload failed business-rule validation
    #[error("{message}")]
    Validation {
        /// Human-readable validation failure
        message: String,
    },

    /// A monetary or quantity value was negative, zero where disallowed, or not finite
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The offending value
        amount: f64,
    },

    /// Review rating outside the 1-5 range
    #[error("Rating must be between 1 and 5, got {rating}")]
    InvalidRating {
        /// The offending rating
        rating: i32,
    },

    /// Referenced employee does not exist
    #[error("Employee {id} not found")]
    EmployeeNotFound {
        /// Employee primary key
        id: i64,
    },

    /// Employee exists but is not active
    #[error("Employee {id} is not active")]
    EmployeeInactive {
        /// Employee primary key
        id: i64,
    },

    /// An employee with this email already exists
    #[error("An employee with email {email} already exists")]
    DuplicateEmail {
        /// The conflicting email address
        email: String,
    },

    /// Attendance already recorded for this employee and date
    #[error("Attendance for employee {employee_id} on {date} is already marked")]
    AttendanceAlreadyMarked {
        /// Employee primary key
        employee_id: i64,
        /// The calendar day of the duplicate record
        date: NaiveDate,
    },

    /// Referenced inventory item does not exist or is inactive
    #[error("Inventory item {id} not found")]
    InventoryItemNotFound {
        /// Inventory item primary key
        id: i64,
    },

    /// Referenced order does not exist
    #[error("Order {id} not found")]
    OrderNotFound {
        /// Order primary key
        id: i64,
    },

    /// Requested order status change is not a legal transition
    #[error("Cannot change order status from {from} to {to}")]
    InvalidStatusTransition {
        /// Current status
        from: OrderStatus,
        /// Requested status
        to: OrderStatus,
    },

    /// Ordering is currently switched off via the menu order window
    #[error("{message}")]
    OrderingClosed {
        /// The configured order-window message shown to customers
        message: String,
    },

    /// Requester does not own the referenced order
    #[error("Order {order_id} does not belong to this user")]
    NotOrderOwner {
        /// Order primary key
        order_id: i64,
    },

    /// Review requires the order to be completed first
    #[error("Order {order_id} is not completed yet (status: {status})")]
    OrderNotCompleted {
        /// Order primary key
        order_id: i64,
        /// The order's current status
        status: OrderStatus,
    },

    /// A review already exists for this order
    #[error("Order {order_id} has already been reviewed")]
    AlreadyReviewed {
        /// Order primary key
        order_id: i64,
    },

    /// Referenced review does not exist
    #[error("Review {id} not found")]
    ReviewNotFound {
        /// Review primary key
        id: i64,
    },

    /// Referenced mirrored user does not exist
    #[error("User {clerk_id} not found")]
    UserNotFound {
        /// Identity-provider user id
        clerk_id: String,
    },

    /// Webhook request is missing one of the required signature headers
    #[error("Missing webhook header: {name}")]
    MissingWebhookHeader {
        /// Name of the absent header
        name: &'static str,
    },

    /// Webhook signature did not verify against the configured secret
    #[error("Webhook signature verification failed")]
    InvalidWebhookSignature,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

impl Error {
    /// HTTP status code this error maps to.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. }
            | Self::InvalidAmount { .. }
            | Self::InvalidRating { .. }
            | Self::InvalidStatusTransition { .. }
            | Self::OrderingClosed { .. }
            | Self::OrderNotCompleted { .. }
            | Self::EmployeeInactive { .. }
            | Self::Json(_) => StatusCode::BAD_REQUEST,

            Self::MissingWebhookHeader { .. } | Self::InvalidWebhookSignature => {
                StatusCode::UNAUTHORIZED
            }

            Self::NotOrderOwner { .. } => StatusCode::FORBIDDEN,

            Self::EmployeeNotFound { .. }
            | Self::InventoryItemNotFound { .. }
            | Self::OrderNotFound { .. }
            | Self::ReviewNotFound { .. }
            | Self::UserNotFound { .. } => StatusCode::NOT_FOUND,

            Self::DuplicateEmail { .. }
            | Self::AttendanceAlreadyMarked { .. }
            | Self::AlreadyReviewed { .. } => StatusCode::CONFLICT,

            Self::Config { .. } | Self::Database(_) | Self::Io(_) | Self::EnvVar(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "success": false,
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

// Convenience `Result` type
/// Crate-wide result alias defaulting to [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
