//! Read-only flashcard queries consumed by the message composer.

use sqlx::PgPool;

/// The notification subsystem only reads the global flashcard count;
/// flashcard CRUD lives outside this service.
pub struct FlashcardRepo;

impl FlashcardRepo {
    /// Global flashcard count (not per-user), shown in reminder content.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar("SELECT COUNT(*) FROM flashcards")
            .fetch_one(pool)
            .await?;
        Ok(count.unwrap_or(0))
    }
}
