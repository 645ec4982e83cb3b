use crate::frontend::route::Route;
use crate::frontend::services::context::{AppNavigator, AuthState};
use dioxus::prelude::*;
use dioxus_router::navigator;
use workdesk::router::{RouteMatch, ViewId};

#[component]
pub fn Navigation(current: String) -> Element {
    let nav = navigator();
    let app_nav = use_context::<AppNavigator>();
    let auth = use_context::<AuthState>();
    let mut logout_error = use_signal(|| None::<String>);

    // Children of the layout, in declaration order
    let items: Vec<(RouteMatch, &'static str)> = app_nav
        .table()
        .leaves()
        .filter(|m| m.layout == Some(ViewId::LayoutContainer))
        .map(|m| (*m, m.view.map_or(m.path, ViewId::title)))
        .collect();

    let logout = move |_: MouseEvent| {
        let mut auth = auth;
        spawn(async move {
            match auth.logout().await {
                Ok(()) => {
                    logout_error.set(None);
                    nav.replace(Route::LoginPage {});
                }
                Err(message) => logout_error.set(Some(message)),
            }
        });
    };

    rsx! {
        nav {
            class: "navigation",
            ul {
                class: "nav-items",
                for (item, label) in items {
                    li {
                        key: "{item.path}",
                        class: if current == item.path { "nav-item active" } else { "nav-item" },
                        onclick: move |_| { nav.push(item.path); },
                        span {
                            class: "nav-text",
                            "{label}"
                        }
                    }
                }
            }
            button {
                class: "nav-logout",
                onclick: logout,
                "Sign out"
            }
            if let Some(message) = logout_error() {
                p {
                    class: "nav-error",
                    "Could not sign out: {message}"
                }
            }
        }
    }
}
