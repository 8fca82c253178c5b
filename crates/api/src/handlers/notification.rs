//! Handlers for the `/notifications` resource.
//!
//! All endpoints require authentication via [`AuthUser`].

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use lexicard_core::error::CoreError;
use lexicard_core::preferences::{NotificationPreferences, UpdatePreferences};
use lexicard_db::models::delivery::DeliveryRecord;
use lexicard_db::models::user::User;
use lexicard_db::repositories::{DeliveryRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for push token registration and removal.
#[derive(Debug, Deserialize)]
pub struct PushTokenRequest {
    pub token: String,
}

/// One page of delivery history.
#[derive(Debug, Serialize)]
pub struct HistoryPage {
    pub notifications: Vec<DeliveryRecord>,
    pub current_page: i64,
    pub total_pages: i64,
    pub total_items: i64,
}

/// Outcome of a push token registration.
#[derive(Debug, Serialize)]
pub struct TokenAdded {
    pub added: bool,
}

/// Human-readable confirmation for the manual test-send endpoints.
#[derive(Debug, Serialize)]
pub struct SendConfirmation {
    pub message: &'static str,
}

async fn fetch_user(state: &AppState, auth: &AuthUser) -> AppResult<User> {
    UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))
}

// ---------------------------------------------------------------------------
// Preferences
// ---------------------------------------------------------------------------

/// GET /api/v1/notifications/preferences
///
/// Return the authenticated user's notification preferences.
pub async fn get_preferences(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<NotificationPreferences>>> {
    let user = fetch_user(&state, &auth).await?;
    Ok(Json(DataResponse {
        data: user.preferences(),
    }))
}

/// PUT /api/v1/notifications/preferences
///
/// Partially update the authenticated user's notification preferences.
/// Validation runs before anything is written: an invalid `reminder_time`
/// or `motivation_frequency` is rejected with 400 and the stored
/// preferences stay unchanged.
pub async fn update_preferences(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(mut input): Json<UpdatePreferences>,
) -> AppResult<Json<DataResponse<NotificationPreferences>>> {
    input.validate()?;

    let user = UserRepo::update_preferences(&state.pool, auth.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))?;

    Ok(Json(DataResponse {
        data: user.preferences(),
    }))
}

// ---------------------------------------------------------------------------
// Delivery history
// ---------------------------------------------------------------------------

/// GET /api/v1/notifications/history?page=&limit=
///
/// Return the authenticated user's delivery history, newest first, with
/// pagination metadata.
pub async fn get_history(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<HistoryPage>>> {
    let (page, limit, offset) = params.resolve();

    let notifications =
        DeliveryRepo::list_for_user(&state.pool, auth.user_id, limit, offset).await?;
    let total_items = DeliveryRepo::count_for_user(&state.pool, auth.user_id).await?;
    let total_pages = (total_items + limit - 1) / limit;

    Ok(Json(DataResponse {
        data: HistoryPage {
            notifications,
            current_page: page,
            total_pages,
            total_items,
        },
    }))
}

// ---------------------------------------------------------------------------
// Manual test sends
// ---------------------------------------------------------------------------

/// POST /api/v1/notifications/test/daily-reminder
///
/// Immediately compose, send, and record a daily reminder for the caller,
/// bypassing eligibility. Repeated calls produce independent delivery
/// records; this path is deliberately not deduplicated.
pub async fn test_daily_reminder(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<SendConfirmation>>> {
    let user = fetch_user(&state, &auth).await?;
    state.notifier.send_reminder(&user).await?;
    Ok(Json(DataResponse {
        data: SendConfirmation {
            message: "Test daily reminder sent",
        },
    }))
}

/// POST /api/v1/notifications/test/motivation
///
/// Immediately compose, send, and record a motivation message for the
/// caller, bypassing eligibility.
pub async fn test_motivation(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<SendConfirmation>>> {
    let user = fetch_user(&state, &auth).await?;
    state.notifier.send_motivation(&user).await?;
    Ok(Json(DataResponse {
        data: SendConfirmation {
            message: "Test motivation message sent",
        },
    }))
}

// ---------------------------------------------------------------------------
// Push tokens
// ---------------------------------------------------------------------------

/// POST /api/v1/notifications/push-token
///
/// Register a device token for the authenticated user. Registering the
/// same token twice is a no-op.
pub async fn register_push_token(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<PushTokenRequest>,
) -> AppResult<Json<DataResponse<TokenAdded>>> {
    let token = input.token.trim();
    if token.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "token must not be empty".into(),
        )));
    }

    let added = UserRepo::add_push_token(&state.pool, auth.user_id, token).await?;
    Ok(Json(DataResponse {
        data: TokenAdded { added },
    }))
}

/// DELETE /api/v1/notifications/push-token
///
/// Unregister a device token. Removing an unknown token succeeds silently.
pub async fn remove_push_token(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<PushTokenRequest>,
) -> AppResult<impl IntoResponse> {
    UserRepo::remove_push_token(&state.pool, auth.user_id, input.token.trim()).await?;
    Ok(StatusCode::NO_CONTENT)
}
