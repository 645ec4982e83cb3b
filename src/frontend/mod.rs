//! Dioxus frontend of the `WorkDesk` application.

pub mod app;
pub mod components;
pub mod pages;
pub mod route;
pub mod services;
