//! Application root.

use crate::frontend::route::Route;
use crate::frontend::services::context::{AppNavigator, AuthState};
use dioxus::prelude::*;
use dioxus_router::Router;
use std::rc::Rc;
use workdesk::config::AppConfig;
use workdesk::router::{AuthGuard, Navigator, RouteTable};
use workdesk::session::TokenStore;

/// Provides the session and the navigator to every route, then hands over to
/// the router.
#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let store = use_context::<TokenStore>();

    let guard_store = store.clone();
    use_context_provider(move || AuthState::new(store));
    let _: AppNavigator = use_context_provider(move || {
        Rc::new(Navigator::new(
            RouteTable::standard(),
            AuthGuard::new(guard_store),
            &config.router,
        ))
    });

    rsx! { Router::<Route> {} }
}
