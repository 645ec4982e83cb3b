//! Catch-all for paths the route table does not know.

use crate::frontend::services::guard::{GuardOutcome, use_navigation_guard};
use dioxus::prelude::*;
use workdesk::router::NavigationError;

/// Renders according to the configured unmatched-path policy: nothing for
/// `blank`, a message for `reject`. `redirect` never renders here.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    match use_navigation_guard(&path) {
        GuardOutcome::Failed(NavigationError::NotFound(missing)) => rsx! {
            section {
                class: "not-found",
                h1 { "Page not found" }
                p { "Nothing lives at {missing}." }
            }
        },
        _ => rsx! {},
    }
}
