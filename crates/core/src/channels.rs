//! Well-known notification type and channel name constants.
//!
//! These must match the values stored in the `delivery_log.notification_type`
//! and `delivery_log.channel` columns and referenced by the scheduler,
//! delivery primitive, and API handlers.

/// Daily study reminder, sent at the user's preferred minute.
pub const TYPE_DAILY_REMINDER: &str = "daily_reminder";

/// Motivation message, sent on the user's chosen frequency.
pub const TYPE_MOTIVATION: &str = "motivation";

/// Email delivery via SMTP.
pub const CHANNEL_EMAIL: &str = "email";

/// Push delivery via FCM device tokens.
pub const CHANNEL_PUSH: &str = "push";

/// Delivery outcome stored in `delivery_log.status`.
pub const STATUS_SENT: &str = "sent";

/// Delivery outcome stored in `delivery_log.status` when a send failed.
pub const STATUS_FAILED: &str = "failed";
