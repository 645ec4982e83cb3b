//! Frontend services: session state and the navigation guard hook.

pub mod context;
pub mod guard;
