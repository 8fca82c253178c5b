//! Domain logic for the Lexicard notification subsystem.
//!
//! Everything in this crate is pure: preference value objects and their
//! validation, the eligibility evaluator, and the message composer. All
//! I/O (database, SMTP, FCM, wall clock) lives in the `lexicard-db` and
//! `lexicard-notify` crates; time-dependent functions here take `now` as
//! a parameter so tests can pin the clock.

pub mod channels;
pub mod compose;
pub mod eligibility;
pub mod error;
pub mod preferences;
pub mod types;
