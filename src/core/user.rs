//! User mirroring business logic - Keeps the local user table in sync with
//! the identity provider.
//!
//! The provider is the system of record; this module only applies its
//! webhook events. Upserts are keyed by the provider's user id and are
//! idempotent, so replayed deliveries never create duplicates, and deletes
//! of already-absent users succeed quietly.

use crate::{
    entities::{User, user},
    errors::{Error, Result},
};
use sea_orm::{Set, prelude::*};

/// Applies a `user.created` or `user.updated` event: inserts the mirror row
/// if the provider id is new, otherwise refreshes name and email in place.
pub async fn upsert_from_identity(
    db: &DatabaseConnection,
    clerk_id: String,
    name: String,
    email: String,
) -> Result<user::Model> {
    if clerk_id.trim().is_empty() {
        return Err(Error::Validation {
            message: "Identity event is missing the user id".to_string(),
        });
    }

    let now = chrono::Utc::now();

    let existing = User::find()
        .filter(user::Column::ClerkId.eq(clerk_id.as_str()))
        .one(db)
        .await?;

    if let Some(user) = existing {
        let mut active_model: user::ActiveModel = user.into();
        active_model.name = Set(name);
        active_model.email = Set(email);
        active_model.updated_at = Set(now);
        return active_model.update(db).await.map_err(Into::into);
    }

    let model = user::ActiveModel {
        clerk_id: Set(clerk_id),
        name: Set(name),
        email: Set(email),
        address: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    model.insert(db).await.map_err(Into::into)
}

/// Applies a `user.deleted` event. Idempotent: returns whether a row was
/// actually removed, and succeeds when the user is already gone.
pub async fn delete_by_clerk_id(db: &DatabaseConnection, clerk_id: &str) -> Result<bool> {
    let existing = User::find()
        .filter(user::Column::ClerkId.eq(clerk_id))
        .one(db)
        .await?;

    match existing {
        Some(user) => {
            user.delete(db).await?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Finds a mirrored user by its identity-provider id.
pub async fn get_by_clerk_id(
    db: &DatabaseConnection,
    clerk_id: &str,
) -> Result<Option<user::Model>> {
    User::find()
        .filter(user::Column::ClerkId.eq(clerk_id))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Updates the locally-maintained profile fields (display name and delivery
/// address). Identity fields stay owned by the provider.
///
/// # Errors
/// Returns an error if no mirrored user exists for `clerk_id`.
pub async fn update_profile(
    db: &DatabaseConnection,
    clerk_id: &str,
    name: Option<String>,
    address: Option<String>,
) -> Result<user::Model> {
    let user = get_by_clerk_id(db, clerk_id)
        .await?
        .ok_or_else(|| Error::UserNotFound {
            clerk_id: clerk_id.to_string(),
        })?;

    let mut active_model: user::ActiveModel = user.into();
    if let Some(name) = name {
        active_model.name = Set(name);
    }
    if let Some(address) = address {
        active_model.address = Set(Some(address));
    }
    active_model.updated_at = Set(chrono::Utc::now());

    active_model.update(db).await.map_err(Into::into)
}
