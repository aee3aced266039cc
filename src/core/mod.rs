//! Core business logic - framework-agnostic operations over the database.
//!
//! Every function here takes a `DatabaseConnection`, validates its inputs,
//! and returns a `Result`; the HTTP layer stays thin and maps these results
//! onto the JSON envelope. Nothing in this module knows about axum.

/// Attendance marking and hour derivation
pub mod attendance;
/// Contact-form inbox operations
pub mod contact;
/// Employee CRUD with attendance cascade on delete
pub mod employee;
/// Inventory CRUD and stock-level updates
pub mod inventory;
/// Keyed singleton menu and order-window management
pub mod menu;
/// Order placement and lifecycle transitions
pub mod order;
/// Review eligibility gate and review CRUD
pub mod review;
/// Append-only stock ledger
pub mod stock_ledger;
/// Identity-provider user mirroring
pub mod user;

/// Minimal shape check for email addresses: one `@` with a dotted domain.
/// Matches the permissiveness of the original's schema-level regex.
pub(crate) fn email_is_valid(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(char::is_whitespace)
}
