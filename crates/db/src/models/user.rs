//! User entity model.
//!
//! Notification preferences are embedded as columns on the user row, which
//! gives the "at most one preference record per user" invariant by
//! construction. Push tokens are a `TEXT[]` column; uniqueness is enforced
//! by the append-if-absent update in the repository.

use serde::Serialize;
use sqlx::FromRow;

use lexicard_core::preferences::{MotivationFrequency, NotificationPreferences};
use lexicard_core::types::{DbId, Timestamp};

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub daily_reminder: bool,
    pub reminder_time: String,
    pub motivation_messages: bool,
    pub motivation_frequency: String,
    pub push_notifications: bool,
    #[serde(skip_serializing)]
    pub push_tokens: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    /// Project the preference columns into the domain value object.
    ///
    /// An unknown stored frequency falls back to the default (weekly)
    /// rather than failing the whole row; the column is constrained by a
    /// CHECK, so this only matters for rows predating the constraint.
    pub fn preferences(&self) -> NotificationPreferences {
        NotificationPreferences {
            daily_reminder: self.daily_reminder,
            reminder_time: self.reminder_time.clone(),
            motivation_messages: self.motivation_messages,
            motivation_frequency: MotivationFrequency::parse(&self.motivation_frequency)
                .unwrap_or_default(),
            push_notifications: self.push_notifications,
        }
    }
}
