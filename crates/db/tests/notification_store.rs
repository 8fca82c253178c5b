use sqlx::PgPool;

use lexicard_core::channels::{
    CHANNEL_EMAIL, CHANNEL_PUSH, STATUS_FAILED, STATUS_SENT, TYPE_DAILY_REMINDER, TYPE_MOTIVATION,
};
use lexicard_core::preferences::UpdatePreferences;
use lexicard_core::types::DbId;
use lexicard_db::models::delivery::NewDelivery;
use lexicard_db::repositories::{DeliveryRepo, FlashcardRepo, UserRepo};

async fn seed_user(pool: &PgPool, email: &str) -> DbId {
    UserRepo::create(pool, "Test User", email, "$argon2id$stub")
        .await
        .unwrap()
        .id
}

fn delivery<'a>(user_id: DbId, notification_type: &'a str, status: &'a str) -> NewDelivery<'a> {
    NewDelivery {
        user_id,
        notification_type,
        channel: CHANNEL_EMAIL,
        destination: Some("test@example.com"),
        subject: "subject",
        status,
        error_message: None,
    }
}

#[sqlx::test(migrations = "../../migrations")]
async fn new_user_gets_default_preferences(pool: PgPool) {
    let user = UserRepo::create(&pool, "Ada", "ada@example.com", "hash")
        .await
        .unwrap();

    assert!(!user.daily_reminder);
    assert_eq!(user.reminder_time, "09:00");
    assert!(!user.motivation_messages);
    assert_eq!(user.motivation_frequency, "weekly");
    assert!(user.push_notifications);
    assert!(user.push_tokens.is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
async fn preference_update_is_partial(pool: PgPool) {
    let id = seed_user(&pool, "ada@example.com").await;

    let update = UpdatePreferences {
        daily_reminder: Some(true),
        reminder_time: Some("18:30".into()),
        ..Default::default()
    };
    let user = UserRepo::update_preferences(&pool, id, &update)
        .await
        .unwrap()
        .unwrap();

    assert!(user.daily_reminder);
    assert_eq!(user.reminder_time, "18:30");
    // Untouched fields keep their defaults.
    assert!(!user.motivation_messages);
    assert_eq!(user.motivation_frequency, "weekly");
    assert!(user.push_notifications);
}

#[sqlx::test(migrations = "../../migrations")]
async fn preference_update_for_missing_user_returns_none(pool: PgPool) {
    let update = UpdatePreferences::default();
    let result = UserRepo::update_preferences(&pool, 999_999, &update)
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn push_token_add_is_idempotent(pool: PgPool) {
    let id = seed_user(&pool, "ada@example.com").await;

    assert!(UserRepo::add_push_token(&pool, id, "tok-1").await.unwrap());
    assert!(!UserRepo::add_push_token(&pool, id, "tok-1").await.unwrap());
    assert!(UserRepo::add_push_token(&pool, id, "tok-2").await.unwrap());

    let user = UserRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(user.push_tokens, vec!["tok-1", "tok-2"]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn push_token_remove_leaves_others(pool: PgPool) {
    let id = seed_user(&pool, "ada@example.com").await;
    for tok in ["tok-1", "tok-2", "tok-3"] {
        UserRepo::add_push_token(&pool, id, tok).await.unwrap();
    }

    UserRepo::remove_push_token(&pool, id, "tok-2").await.unwrap();
    // Removing an absent token is a no-op, not an error.
    UserRepo::remove_push_token(&pool, id, "tok-2").await.unwrap();

    let user = UserRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(user.push_tokens, vec!["tok-1", "tok-3"]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn reminder_recipients_filter_on_flag_and_minute(pool: PgPool) {
    let on_time = seed_user(&pool, "a@example.com").await;
    let other_time = seed_user(&pool, "b@example.com").await;
    let disabled = seed_user(&pool, "c@example.com").await;

    for (id, reminder, time) in [
        (on_time, true, "09:00"),
        (other_time, true, "09:01"),
        (disabled, false, "09:00"),
    ] {
        let update = UpdatePreferences {
            daily_reminder: Some(reminder),
            reminder_time: Some(time.into()),
            ..Default::default()
        };
        UserRepo::update_preferences(&pool, id, &update).await.unwrap();
    }

    let due = UserRepo::list_reminder_recipients(&pool, "09:00").await.unwrap();
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].id, on_time);
}

#[sqlx::test(migrations = "../../migrations")]
async fn delivery_log_appends_and_paginates_newest_first(pool: PgPool) {
    let id = seed_user(&pool, "ada@example.com").await;

    for _ in 0..3 {
        DeliveryRepo::create(&pool, &delivery(id, TYPE_DAILY_REMINDER, STATUS_SENT))
            .await
            .unwrap();
    }

    assert_eq!(DeliveryRepo::count_for_user(&pool, id).await.unwrap(), 3);

    let page = DeliveryRepo::list_for_user(&pool, id, 2, 0).await.unwrap();
    assert_eq!(page.len(), 2);
    assert!(page[0].sent_at >= page[1].sent_at);

    let rest = DeliveryRepo::list_for_user(&pool, id, 2, 2).await.unwrap();
    assert_eq!(rest.len(), 1);
}

#[sqlx::test(migrations = "../../migrations")]
async fn last_sent_ignores_failed_attempts(pool: PgPool) {
    let id = seed_user(&pool, "ada@example.com").await;

    assert!(DeliveryRepo::last_sent_at(&pool, id, TYPE_MOTIVATION)
        .await
        .unwrap()
        .is_none());

    let sent_id = DeliveryRepo::create(&pool, &delivery(id, TYPE_MOTIVATION, STATUS_SENT))
        .await
        .unwrap();
    DeliveryRepo::create(&pool, &delivery(id, TYPE_MOTIVATION, STATUS_FAILED))
        .await
        .unwrap();
    // A later sent reminder must not affect the motivation clock either.
    DeliveryRepo::create(&pool, &delivery(id, TYPE_DAILY_REMINDER, STATUS_SENT))
        .await
        .unwrap();

    let last = DeliveryRepo::last_sent_at(&pool, id, TYPE_MOTIVATION)
        .await
        .unwrap()
        .unwrap();

    let sent_row: (chrono::DateTime<chrono::Utc>,) =
        sqlx::query_as("SELECT sent_at FROM delivery_log WHERE id = $1")
            .bind(sent_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(last, sent_row.0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn push_records_accept_null_destination(pool: PgPool) {
    let id = seed_user(&pool, "ada@example.com").await;
    let record = NewDelivery {
        user_id: id,
        notification_type: TYPE_DAILY_REMINDER,
        channel: CHANNEL_PUSH,
        destination: None,
        subject: "push title",
        status: STATUS_FAILED,
        error_message: Some("invalid token"),
    };
    DeliveryRepo::create(&pool, &record).await.unwrap();

    let page = DeliveryRepo::list_for_user(&pool, id, 10, 0).await.unwrap();
    assert_eq!(page[0].destination, None);
    assert_eq!(page[0].error_message.as_deref(), Some("invalid token"));
}

#[sqlx::test(migrations = "../../migrations")]
async fn flashcard_count_is_global(pool: PgPool) {
    assert_eq!(FlashcardRepo::count(&pool).await.unwrap(), 0);

    sqlx::query("INSERT INTO flashcards (front, back) VALUES ('hello', 'merhaba'), ('cat', 'kedi')")
        .execute(&pool)
        .await
        .unwrap();

    assert_eq!(FlashcardRepo::count(&pool).await.unwrap(), 2);
}
