pub mod auth;
pub mod health;
pub mod notification;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/register                       register (public)
/// /auth/login                          login (public)
/// /auth/me                             current user
///
/// /notifications/preferences           get, update preferences
/// /notifications/history               paginated delivery history
/// /notifications/test/daily-reminder   immediate test reminder (POST)
/// /notifications/test/motivation       immediate test motivation (POST)
/// /notifications/push-token            register, unregister device token
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (register, login, me).
        .nest("/auth", auth::router())
        // Notification preferences, history, test sends, push tokens.
        .nest("/notifications", notification::router())
}
