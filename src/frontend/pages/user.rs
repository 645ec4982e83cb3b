use crate::frontend::components::ViewPanel;
use dioxus::prelude::*;
use workdesk::router::ViewId;

#[component]
pub fn UserAvatar() -> Element {
    rsx! { ViewPanel { view: ViewId::UserAvatar } }
}

#[component]
pub fn UserPassword() -> Element {
    rsx! { ViewPanel { view: ViewId::UserPassword } }
}

#[component]
pub fn UserProfile() -> Element {
    rsx! { ViewPanel { view: ViewId::UserProfile } }
}
