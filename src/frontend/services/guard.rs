//! Hook applying the navigation guard to the route being rendered.

use crate::frontend::services::context::{AppNavigator, AuthState};
use dioxus::prelude::*;
use dioxus_router::navigator;
use workdesk::router::{Navigation, NavigationError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// The route may render.
    Render(Navigation),
    /// A replacement navigation is under way.
    Redirected,
    Failed(NavigationError),
}

/// Runs the navigator for the router path `path` and replaces the location
/// when it settles elsewhere.
///
/// The router hands out paths relative to its history base, so the base path
/// is not stripped again here.
pub fn use_navigation_guard(path: &str) -> GuardOutcome {
    let app_nav = use_context::<AppNavigator>();
    let auth = use_context::<AuthState>();
    let nav = navigator();

    // Re-run whenever the session changes
    let _authenticated = (auth.is_authenticated)();

    match app_nav.navigate_route(path) {
        Ok(navigation) if navigation.target != path => {
            log::debug!("Redirecting {path} to {}", navigation.target);
            nav.replace(navigation.target.as_str());
            GuardOutcome::Redirected
        }
        Ok(navigation) => GuardOutcome::Render(navigation),
        Err(e) => {
            log::warn!("Navigation to {path} failed: {e}");
            GuardOutcome::Failed(e)
        }
    }
}
