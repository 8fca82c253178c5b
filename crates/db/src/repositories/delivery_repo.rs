//! Repository for the append-only `delivery_log` table.

use sqlx::PgPool;

use lexicard_core::channels::STATUS_SENT;
use lexicard_core::types::{DbId, Timestamp};

use crate::models::delivery::{DeliveryRecord, NewDelivery};

/// Column list for `delivery_log` queries.
const COLUMNS: &str = "id, user_id, notification_type, channel, destination, subject, \
    status, error_message, sent_at";

/// Provides append and read operations for delivery records. Records are
/// never updated or deleted here; the table is history.
pub struct DeliveryRepo;

impl DeliveryRepo {
    /// Append one delivery attempt, returning the generated id.
    pub async fn create(pool: &PgPool, record: &NewDelivery<'_>) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO delivery_log \
                (user_id, notification_type, channel, destination, subject, status, error_message) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING id",
        )
        .bind(record.user_id)
        .bind(record.notification_type)
        .bind(record.channel)
        .bind(record.destination)
        .bind(record.subject)
        .bind(record.status)
        .bind(record.error_message)
        .fetch_one(pool)
        .await
    }

    /// List a user's delivery history, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<DeliveryRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM delivery_log \
             WHERE user_id = $1 \
             ORDER BY sent_at DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, DeliveryRecord>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Total number of delivery records for a user (pagination).
    pub async fn count_for_user(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        let count: Option<i64> =
            sqlx::query_scalar("SELECT COUNT(*) FROM delivery_log WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(pool)
                .await?;
        Ok(count.unwrap_or(0))
    }

    /// Timestamp of the most recent **successful** delivery of the given
    /// type for a user.
    ///
    /// Failed attempts are excluded so they never advance the motivation
    /// eligibility clock.
    pub async fn last_sent_at(
        pool: &PgPool,
        user_id: DbId,
        notification_type: &str,
    ) -> Result<Option<Timestamp>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT MAX(sent_at) FROM delivery_log \
             WHERE user_id = $1 AND notification_type = $2 AND status = $3",
        )
        .bind(user_id)
        .bind(notification_type)
        .bind(STATUS_SENT)
        .fetch_one(pool)
        .await
    }
}
