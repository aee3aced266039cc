//! Contact message entity - Write-only inbox for the contact form.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Contact message database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact_messages")]
pub struct Model {
    /// Unique identifier for the message
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Name of the sender
    pub name: String,
    /// Email address of the sender
    pub email: String,
    /// Phone number of the sender, if provided
    pub phone: Option<String>,
    /// Message subject line
    pub subject: String,
    /// Message body
    pub message: String,
    /// When the message was received
    pub created_at: DateTimeUtc,
}

/// Contact messages have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
