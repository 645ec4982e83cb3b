//! Routed views.

pub mod login;
pub mod not_found;
pub mod user;
pub mod works;
