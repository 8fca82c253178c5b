//! Row structs and DTOs for every table.

pub mod delivery;
pub mod user;
