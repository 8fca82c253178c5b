//! Per-user notification preference value objects and input validation.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Default reminder time applied at registration.
pub const DEFAULT_REMINDER_TIME: &str = "09:00";

/// How often a user receives motivation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MotivationFrequency {
    Daily,
    #[default]
    Weekly,
    Biweekly,
}

impl MotivationFrequency {
    /// Minimum whole days between two motivation messages.
    pub fn days(self) -> i64 {
        match self {
            MotivationFrequency::Daily => 1,
            MotivationFrequency::Weekly => 7,
            MotivationFrequency::Biweekly => 14,
        }
    }

    /// String form stored in the `users.motivation_frequency` column.
    pub fn as_str(self) -> &'static str {
        match self {
            MotivationFrequency::Daily => "daily",
            MotivationFrequency::Weekly => "weekly",
            MotivationFrequency::Biweekly => "biweekly",
        }
    }

    /// Parse the stored string form. Rejects anything outside the enum.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "daily" => Ok(MotivationFrequency::Daily),
            "weekly" => Ok(MotivationFrequency::Weekly),
            "biweekly" => Ok(MotivationFrequency::Biweekly),
            other => Err(CoreError::Validation(format!(
                "motivation_frequency must be 'daily', 'weekly' or 'biweekly', got '{other}'"
            ))),
        }
    }
}

/// A user's notification preferences (one record per user, embedded in the
/// user row).
#[derive(Debug, Clone, Serialize)]
pub struct NotificationPreferences {
    /// Daily study reminder on/off.
    pub daily_reminder: bool,
    /// Normalized 24-hour `HH:MM` reminder time.
    pub reminder_time: String,
    /// Motivation messages on/off.
    pub motivation_messages: bool,
    /// How often motivation messages may be sent.
    pub motivation_frequency: MotivationFrequency,
    /// Push channel on/off (email is always attempted).
    pub push_notifications: bool,
}

/// Partial preference update. `None` fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePreferences {
    pub daily_reminder: Option<bool>,
    pub reminder_time: Option<String>,
    pub motivation_messages: Option<bool>,
    pub motivation_frequency: Option<MotivationFrequency>,
    pub push_notifications: Option<bool>,
}

impl UpdatePreferences {
    /// Validate and normalize the update before it touches the store.
    ///
    /// `reminder_time` is canonicalized to zero-padded `HH:MM` so that the
    /// scheduler's minute comparison always matches. Returns the normalized
    /// time (when present) or a validation error; on error the caller must
    /// leave preferences unchanged.
    pub fn validate(&mut self) -> Result<(), CoreError> {
        if let Some(time) = &self.reminder_time {
            self.reminder_time = Some(normalize_reminder_time(time)?);
        }
        Ok(())
    }
}

/// Parse and normalize a 24-hour `HH:MM` string.
///
/// A single-digit hour is accepted and zero-padded (`"9:05"` → `"09:05"`).
pub fn normalize_reminder_time(input: &str) -> Result<String, CoreError> {
    let invalid = || {
        CoreError::Validation(format!(
            "reminder_time must be a 24-hour HH:MM time, got '{input}'"
        ))
    };

    let (hour, minute) = input.split_once(':').ok_or_else(invalid)?;
    if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
        return Err(invalid());
    }

    let hour: u32 = hour.parse().map_err(|_| invalid())?;
    let minute: u32 = minute.parse().map_err(|_| invalid())?;
    if hour > 23 || minute > 59 {
        return Err(invalid());
    }

    Ok(format!("{hour:02}:{minute:02}"))
}
