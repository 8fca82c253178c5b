//! HTTP request handlers, grouped per resource.

pub mod auth;
pub mod notification;
