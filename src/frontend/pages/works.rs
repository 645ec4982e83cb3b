use crate::frontend::components::ViewPanel;
use dioxus::prelude::*;
use workdesk::router::ViewId;

#[component]
pub fn WorkOne() -> Element {
    rsx! { ViewPanel { view: ViewId::WorkOne } }
}

#[component]
pub fn WorkTwo() -> Element {
    rsx! { ViewPanel { view: ViewId::WorkTwo } }
}
