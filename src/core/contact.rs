//! Contact inbox business logic.
//!
//! The contact form writes into an append-only inbox; the only other
//! operation is the admin listing. Messages have no further lifecycle.

use crate::{
    entities::{ContactMessage, contact_message},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Stores a contact-form submission.
///
/// # Errors
/// Returns an error if the name, subject, or message is empty, the email is
/// malformed, or the database insert fails.
pub async fn create_message(
    db: &DatabaseConnection,
    name: String,
    email: String,
    phone: Option<String>,
    subject: String,
    message: String,
) -> Result<contact_message::Model> {
    for (field, value) in [("name", &name), ("subject", &subject), ("message", &message)] {
        if value.trim().is_empty() {
            return Err(Error::Validation {
                message: format!("Contact {field} cannot be empty"),
            });
        }
    }

    if !super::email_is_valid(&email) {
        return Err(Error::Validation {
            message: format!("Invalid email address: {email}"),
        });
    }

    let model = contact_message::ActiveModel {
        name: Set(name.trim().to_string()),
        email: Set(email),
        phone: Set(phone),
        subject: Set(subject.trim().to_string()),
        message: Set(message),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    model.insert(db).await.map_err(Into::into)
}

/// Retrieves every message in the inbox, newest first.
pub async fn get_all_messages(db: &DatabaseConnection) -> Result<Vec<contact_message::Model>> {
    ContactMessage::find()
        .order_by_desc(contact_message::Column::CreatedAt)
        .order_by_desc(contact_message::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_message_integration() -> Result<()> {
        let db = setup_test_db().await?;

        let message = create_message(
            &db,
            "Kasun Perera".to_string(),
            "kasun@example.com".to_string(),
            Some("0771234567".to_string()),
            "Catering inquiry".to_string(),
            "Do you cater for weddings?".to_string(),
        )
        .await?;

        assert_eq!(message.subject, "Catering inquiry");
        assert_eq!(message.phone, Some("0771234567".to_string()));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_message_validation() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_message(
            &db,
            String::new(),
            "kasun@example.com".to_string(),
            None,
            "Subject".to_string(),
            "Body".to_string(),
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::Validation { message: _ }
        ));

        let result = create_message(
            &db,
            "Kasun".to_string(),
            "not-an-email".to_string(),
            None,
            "Subject".to_string(),
            "Body".to_string(),
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::Validation { message: _ }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_inbox_newest_first() -> Result<()> {
        let db = setup_test_db().await?;

        for subject in ["First", "Second"] {
            create_message(
                &db,
                "Kasun".to_string(),
                "kasun@example.com".to_string(),
                None,
                subject.to_string(),
                "Body".to_string(),
            )
            .await?;
        }

        let inbox = get_all_messages(&db).await?;
        assert_eq!(inbox.len(), 2);
        assert_eq!(inbox[0].subject, "Second");
        assert_eq!(inbox[1].subject, "First");

        Ok(())
    }
}
