//! User entity - Local mirror of identity-provider users.
//!
//! The identity provider is the system of record; rows here are upserted
//! idempotently from its webhook events keyed by `clerk_id` and removed on
//! the corresponding delete event.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Unique identifier for the local mirror row
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Identity-provider user id, unique
    #[sea_orm(unique)]
    pub clerk_id: String,
    /// Display name, assembled from the provider's first/last name
    pub name: String,
    /// Primary email address, unique
    #[sea_orm(unique)]
    pub email: String,
    /// Delivery address, maintained locally
    pub address: Option<String>,
    /// When the mirror row was created
    pub created_at: DateTimeUtc,
    /// When the mirror row was last modified
    pub updated_at: DateTimeUtc,
}

/// User has no relationships with other entities; orders and reviews
/// reference users by their identity-provider id, not by this table's key
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
