//! HTTP layer - axum router, shared state, and request handlers.
//!
//! Handlers are thin: they deserialize a typed request contract, call into
//! [`crate::core`], and wrap the result in the uniform
//! `{ success, data, message? }` envelope. Error mapping to status codes
//! lives on [`crate::errors::Error`].

/// Contact form endpoints
pub mod contact;
/// Employee and attendance endpoints
pub mod employees;
/// Inventory and stock ledger endpoints
pub mod inventory;
/// Menu and order-window endpoints
pub mod menu;
/// Order placement and lifecycle endpoints
pub mod orders;
/// Uniform JSON response envelope
pub mod response;
/// Review endpoints
pub mod reviews;
/// Mirrored user endpoints
pub mod users;
/// Identity-provider webhook endpoint
pub mod webhook;

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{delete, get, patch, post},
};
use sea_orm::DatabaseConnection;
use tokio::{net::TcpListener, signal};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::{config::settings::AppConfig, errors::Result};

/// Shared state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection for all database operations
    pub db: DatabaseConnection,
    /// Runtime configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Creates a new `AppState` from the database connection and settings.
    #[must_use]
    pub const fn new(db: DatabaseConnection, config: Arc<AppConfig>) -> Self {
        Self { db, config }
    }
}

/// Assembles the full API router.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/menu", get(menu::get_menu).post(menu::update_menu))
        .route("/api/menu/order-window", post(menu::set_order_window))
        .route(
            "/api/orders",
            post(orders::place_order).get(orders::list_orders),
        )
        .route("/api/orders/summary", get(orders::meal_window_summary))
        .route("/api/orders/user/:user_id", get(orders::list_orders_for_user))
        .route("/api/orders/:id", get(orders::get_order))
        .route("/api/orders/:id/status", patch(orders::update_status))
        .route(
            "/api/inventory",
            get(inventory::list_items).post(inventory::create_item),
        )
        .route(
            "/api/inventory/:id",
            get(inventory::get_item)
                .put(inventory::update_item)
                .delete(inventory::delete_item),
        )
        .route("/api/inventory/:id/stock", patch(inventory::update_stock))
        .route("/api/inventory/:id/history", get(inventory::stock_history))
        .route(
            "/api/employees",
            get(employees::list_employees).post(employees::create_employee),
        )
        .route(
            "/api/employees/attendance",
            post(employees::mark_attendance).get(employees::list_attendance),
        )
        .route(
            "/api/employees/:id",
            get(employees::get_employee)
                .put(employees::update_employee)
                .delete(employees::delete_employee),
        )
        .route(
            "/api/reviews",
            post(reviews::create_review).get(reviews::list_reviews),
        )
        .route("/api/reviews/can-review", get(reviews::can_review))
        .route("/api/reviews/:id", delete(reviews::delete_review))
        .route(
            "/api/contact",
            post(contact::create_message).get(contact::list_messages),
        )
        .route("/api/user/webhook", post(webhook::handle_webhook))
        .route(
            "/api/user/:clerk_id",
            get(users::get_user).put(users::update_user),
        )
        .layer(cors)
        .with_state(state)
}

/// Binds the listener and serves the API until a shutdown signal arrives.
pub async fn serve(state: AppState) -> Result<()> {
    let address = format!("0.0.0.0:{}", state.config.port);
    let app = build_router(state);

    info!("Binding to {address}");
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl+C, shutting down");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => tracing::error!("Failed to install signal handler: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
