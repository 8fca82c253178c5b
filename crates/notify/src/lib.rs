//! Notification delivery: channel senders (SMTP email, FCM push), the
//! shared compose→send→record primitive, and the scheduler loops.

pub mod delivery;
pub mod email;
pub mod push;
pub mod scheduler;

pub use delivery::{Notifier, NotifyError};
pub use scheduler::NotificationScheduler;
