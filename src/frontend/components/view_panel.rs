use dioxus::prelude::*;
use workdesk::router::ViewId;

/// Placeholder body for a routed view.
#[component]
pub fn ViewPanel(view: ViewId) -> Element {
    let title = view.title();
    let module = view.module();

    rsx! {
        section {
            class: "view-panel",
            h1 { "{title}" }
            p {
                class: "view-module",
                "{module}"
            }
        }
    }
}
