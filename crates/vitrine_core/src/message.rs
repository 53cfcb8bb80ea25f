//! Inbound contact messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vitrine_error::ValidationError;

/// Contact form submission, as sent to `/api/contact`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactMessageDraft {
    /// Sender name
    pub name: String,
    /// Sender e-mail
    pub email: String,
    /// Sender phone
    pub phone: String,
    /// Sender company
    pub company: String,
    /// Message body
    pub message: String,
    /// Area the sender is interested in
    pub area_of_interest: String,
}

impl ContactMessageDraft {
    /// Name, e-mail and message are required; phone and company are optional.
    #[track_caller]
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::empty(field));
            }
        }
        Ok(())
    }
}

/// A stored contact message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Backend id
    pub id: String,
    /// Submitted fields
    #[serde(flatten)]
    pub draft: ContactMessageDraft,
    /// Seen by an admin
    #[serde(default)]
    pub is_read: bool,
    /// Arrival time
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    /// Arrival time formatted for the inbox.
    pub fn display_date(&self) -> String {
        self.created_at.format("%d/%m/%Y %H:%M").to_string()
    }
}
