//! Repository for the `users` table, including the embedded notification
//! preference columns and the push token set.

use sqlx::PgPool;

use lexicard_core::preferences::UpdatePreferences;
use lexicard_core::types::DbId;

use crate::models::user::User;

/// Column list for `users` queries.
const COLUMNS: &str = "id, name, email, password_hash, daily_reminder, reminder_time, \
    motivation_messages, motivation_frequency, push_notifications, push_tokens, \
    created_at, updated_at";

/// Provides CRUD operations for users and their notification preferences.
pub struct UserRepo;

impl UserRepo {
    /// Create a user with default notification preferences.
    pub async fn create(
        pool: &PgPool,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (name, email, password_hash) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(name)
            .bind(email)
            .bind(password_hash)
            .fetch_one(pool)
            .await
    }

    /// Fetch a user by id.
    pub async fn find_by_id(pool: &PgPool, user_id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch a user by email (login path).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List users whose daily reminder is on and scheduled for the given
    /// `HH:MM` minute. Called once per scheduler tick.
    pub async fn list_reminder_recipients(
        pool: &PgPool,
        current_time: &str,
    ) -> Result<Vec<User>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users \
             WHERE daily_reminder = true AND reminder_time = $1 \
             ORDER BY id"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(current_time)
            .fetch_all(pool)
            .await
    }

    /// List users with motivation messages enabled. Frequency filtering
    /// happens in the eligibility evaluator against the delivery log.
    pub async fn list_motivation_recipients(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users \
             WHERE motivation_messages = true \
             ORDER BY id"
        );
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }

    /// Apply a partial preference update.
    ///
    /// Uses `COALESCE` so only fields that are `Some` overwrite existing
    /// values. The input must already be validated/normalized
    /// (`UpdatePreferences::validate`).
    pub async fn update_preferences(
        pool: &PgPool,
        user_id: DbId,
        update: &UpdatePreferences,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET \
                daily_reminder = COALESCE($2, daily_reminder), \
                reminder_time = COALESCE($3, reminder_time), \
                motivation_messages = COALESCE($4, motivation_messages), \
                motivation_frequency = COALESCE($5, motivation_frequency), \
                push_notifications = COALESCE($6, push_notifications), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(user_id)
            .bind(update.daily_reminder)
            .bind(update.reminder_time.as_deref())
            .bind(update.motivation_messages)
            .bind(update.motivation_frequency.map(|f| f.as_str()))
            .bind(update.push_notifications)
            .fetch_optional(pool)
            .await
    }

    /// Register a push token for a user.
    ///
    /// Append-if-absent in one UPDATE, so concurrent registrations cannot
    /// produce duplicates. Returns `true` if the token was added, `false`
    /// if it was already present (or the user does not exist).
    pub async fn add_push_token(
        pool: &PgPool,
        user_id: DbId,
        token: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE users \
             SET push_tokens = array_append(push_tokens, $2), updated_at = NOW() \
             WHERE id = $1 AND NOT ($2 = ANY(push_tokens))",
        )
        .bind(user_id)
        .bind(token)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove a push token from a user's token set.
    ///
    /// `array_remove` is a targeted remove-if-present update: two prunes
    /// racing on the same user cannot lose each other's writes the way a
    /// read-modify-write of the whole list would. Also used by the push
    /// sender to prune invalid tokens.
    pub async fn remove_push_token(
        pool: &PgPool,
        user_id: DbId,
        token: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE users \
             SET push_tokens = array_remove(push_tokens, $2), updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(user_id)
        .bind(token)
        .execute(pool)
        .await?;
        Ok(())
    }
}
