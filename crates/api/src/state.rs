use std::sync::Arc;

use lexicard_notify::Notifier;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: lexicard_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Delivery primitive shared with the scheduler; the manual test-send
    /// endpoints go through the same compose→send→record path.
    pub notifier: Arc<Notifier>,
}
