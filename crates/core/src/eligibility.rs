//! Pure due/not-due decisions for both notification types.
//!
//! The scheduler calls these once per tick with the current wall-clock
//! time; nothing here reads the clock or the database, which keeps every
//! rule testable with a pinned `now`.

use crate::preferences::NotificationPreferences;
use crate::types::Timestamp;

/// Whether a daily reminder is due at `now`.
///
/// Due iff the preference is on and `now` truncated to the minute equals
/// the user's `reminder_time`. The scheduler ticks once per minute, so a
/// matching minute produces at most one send per day.
pub fn reminder_due(prefs: &NotificationPreferences, now: Timestamp) -> bool {
    prefs.daily_reminder && now.format("%H:%M").to_string() == prefs.reminder_time
}

/// Whether a motivation message is due at `now`.
///
/// `last_sent` must be the timestamp of the most recent **successful**
/// motivation delivery; failed attempts do not advance the clock. Due iff
/// the preference is on and either no successful delivery exists or the
/// elapsed whole days meet the frequency threshold.
pub fn motivation_due(
    prefs: &NotificationPreferences,
    last_sent: Option<Timestamp>,
    now: Timestamp,
) -> bool {
    if !prefs.motivation_messages {
        return false;
    }
    match last_sent {
        None => true,
        Some(sent_at) => (now - sent_at).num_days() >= prefs.motivation_frequency.days(),
    }
}
