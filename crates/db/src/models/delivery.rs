//! Delivery log entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use lexicard_core::types::{DbId, Timestamp};

/// A row from the `delivery_log` table.
///
/// Rows are immutable facts: one per send attempt, per recipient/channel,
/// never updated or deleted by normal operation.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DeliveryRecord {
    pub id: DbId,
    pub user_id: DbId,
    /// `daily_reminder` or `motivation`.
    pub notification_type: String,
    /// `email` or `push`.
    pub channel: String,
    /// Email address for the email channel; `None` for push.
    pub destination: Option<String>,
    pub subject: String,
    /// `sent` or `failed`.
    pub status: String,
    pub error_message: Option<String>,
    pub sent_at: Timestamp,
}

/// DTO for appending one delivery attempt.
#[derive(Debug)]
pub struct NewDelivery<'a> {
    pub user_id: DbId,
    pub notification_type: &'a str,
    pub channel: &'a str,
    pub destination: Option<&'a str>,
    pub subject: &'a str,
    pub status: &'a str,
    pub error_message: Option<&'a str>,
}
