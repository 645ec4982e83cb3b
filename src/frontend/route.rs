//! Application routing system.

use crate::frontend::components::layout::LayoutContainer;
use crate::frontend::pages::login::LoginPage;
use crate::frontend::pages::not_found::NotFound;
use crate::frontend::pages::user::{UserAvatar, UserPassword, UserProfile};
use crate::frontend::pages::works::{WorkOne, WorkTwo};

use dioxus::prelude::*;
use dioxus_router::Routable;
use workdesk::router::ViewId;

/// Mirrors `RouteTable::standard`; the catch-all renders according to the
/// unmatched-path policy.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    LoginPage {},
    #[layout(LayoutContainer)]
        #[redirect("/", || Route::WorkOne {})]
        #[route("/works/workOne")]
        WorkOne {},
        #[route("/works/workTwo")]
        WorkTwo {},
        #[route("/user/avatar")]
        UserAvatar {},
        #[route("/user/password")]
        UserPassword {},
        #[route("/user/profile")]
        UserProfile {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    pub fn view(&self) -> Option<ViewId> {
        match self {
            Self::LoginPage {} => Some(ViewId::LoginPage),
            Self::WorkOne {} => Some(ViewId::WorkOne),
            Self::WorkTwo {} => Some(ViewId::WorkTwo),
            Self::UserAvatar {} => Some(ViewId::UserAvatar),
            Self::UserPassword {} => Some(ViewId::UserPassword),
            Self::UserProfile {} => Some(ViewId::UserProfile),
            Self::NotFound { .. } => None,
        }
    }
}
