//! Routing core of the `WorkDesk` application.
//!
//! The route table, the authentication guard and the navigator live here,
//! independent of any renderer, so the binary's Dioxus frontend and the tests
//! share one definition of where a navigation ends up.

pub mod config;
pub mod router;
pub mod session;
pub mod utils;
