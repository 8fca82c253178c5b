//! Route definitions for the `/notifications` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::notification;
use crate::state::AppState;

/// Routes mounted at `/notifications` (all require auth).
///
/// ```text
/// GET    /preferences           -> current preferences
/// PUT    /preferences           -> partial preference update
/// GET    /history               -> paginated delivery history
/// POST   /test/daily-reminder   -> immediate test reminder
/// POST   /test/motivation       -> immediate test motivation message
/// POST   /push-token            -> register device token
/// DELETE /push-token            -> unregister device token
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/preferences",
            get(notification::get_preferences).put(notification::update_preferences),
        )
        .route("/history", get(notification::get_history))
        .route(
            "/test/daily-reminder",
            post(notification::test_daily_reminder),
        )
        .route("/test/motivation", post(notification::test_motivation))
        .route(
            "/push-token",
            post(notification::register_push_token).delete(notification::remove_push_token),
        )
}
