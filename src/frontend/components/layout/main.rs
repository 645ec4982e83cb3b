use crate::frontend::components::layout::Navigation;
use crate::frontend::route::Route;
use crate::frontend::services::guard::{GuardOutcome, use_navigation_guard};
use dioxus::prelude::*;
use dioxus_router::{components::Outlet, use_route};

const LAYOUT_CSS: &str = r#"
.layout { display: flex; min-height: 100vh; font-family: sans-serif; }
.navigation { width: 220px; background: #1f2430; color: #e6e6e6; padding: 16px 0; }
.nav-items { list-style: none; margin: 0; padding: 0; }
.nav-item { padding: 10px 20px; cursor: pointer; }
.nav-item.active { background: #2f3747; font-weight: bold; }
.nav-logout { margin: 24px 20px 0; }
.nav-error { color: #e57373; margin: 8px 20px; }
.content { flex: 1; padding: 24px; }
"#;

/// Layout for the signed-in part of the application with the navigation guard.
#[component]
pub fn LayoutContainer() -> Element {
    let route = use_route::<Route>();
    let path = route.to_string();

    match use_navigation_guard(&path) {
        GuardOutcome::Render(_) => rsx! {
            style { "{LAYOUT_CSS}" }
            div {
                class: "layout",
                Navigation { current: path }
                main {
                    class: "content",
                    Outlet::<Route> {}
                }
            }
        },
        GuardOutcome::Redirected | GuardOutcome::Failed(_) => rsx! { div {} },
    }
}
