//! Lazily resolved views.
//!
//! Routes bind to a [`ViewId`] rather than to a concrete component. Turning a
//! `ViewId` into something renderable goes through a [`ViewResolver`], which
//! may fail; the failure is reported as a [`ViewLoadError`] instead of being
//! left to the renderer.

use crate::router::table::RouteTable;
use futures_util::future::try_join_all;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ViewId {
    LoginPage,
    LayoutContainer,
    WorkOne,
    WorkTwo,
    UserAvatar,
    UserPassword,
    UserProfile,
}

impl ViewId {
    pub const ALL: [Self; 7] = [
        Self::LoginPage,
        Self::LayoutContainer,
        Self::WorkOne,
        Self::WorkTwo,
        Self::UserAvatar,
        Self::UserPassword,
        Self::UserProfile,
    ];

    /// Module the view is loaded from.
    pub const fn module(self) -> &'static str {
        match self {
            Self::LoginPage => "views/login/login_page",
            Self::LayoutContainer => "views/layout/layout_container",
            Self::WorkOne => "views/works/work_one",
            Self::WorkTwo => "views/works/work_two",
            Self::UserAvatar => "views/user/user_avatar",
            Self::UserPassword => "views/user/user_password",
            Self::UserProfile => "views/user/user_profile",
        }
    }

    /// Human readable title shown in navigation.
    pub const fn title(self) -> &'static str {
        match self {
            Self::LoginPage => "Sign in",
            Self::LayoutContainer => "WorkDesk",
            Self::WorkOne => "Work one",
            Self::WorkTwo => "Work two",
            Self::UserAvatar => "Avatar",
            Self::UserPassword => "Password",
            Self::UserProfile => "Profile",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.module())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedView {
    pub id: ViewId,
    pub module: &'static str,
}

impl ResolvedView {
    pub const fn new(id: ViewId) -> Self {
        Self {
            id,
            module: id.module(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewLoadError {
    /// The view's module is not available.
    Missing(ViewId),
    /// The module exists but could not be loaded.
    Failed { view: ViewId, reason: String },
}

impl ViewLoadError {
    pub const fn view(&self) -> ViewId {
        match self {
            Self::Missing(view) | Self::Failed { view, .. } => *view,
        }
    }
}

impl fmt::Display for ViewLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(view) => write!(f, "view module `{view}` is missing"),
            Self::Failed { view, reason } => {
                write!(f, "view module `{view}` failed to load: {reason}")
            }
        }
    }
}

impl std::error::Error for ViewLoadError {}

/// Turns a view binding into a loaded view.
pub trait ViewResolver {
    fn resolve(&self, view: ViewId)
    -> impl Future<Output = Result<ResolvedView, ViewLoadError>> + Send;
}

/// Resolver for views compiled into the binary.
///
/// Views can be marked unavailable to model a module that failed to ship.
#[derive(Debug, Clone, Default)]
pub struct StaticViewResolver {
    unavailable: HashSet<ViewId>,
}

impl StaticViewResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without(views: impl IntoIterator<Item = ViewId>) -> Self {
        Self {
            unavailable: views.into_iter().collect(),
        }
    }
}

impl ViewResolver for StaticViewResolver {
    async fn resolve(&self, view: ViewId) -> Result<ResolvedView, ViewLoadError> {
        if self.unavailable.contains(&view) {
            log::warn!("View `{view}` is not available");
            return Err(ViewLoadError::Missing(view));
        }
        log::debug!("Resolved view `{view}`");
        Ok(ResolvedView::new(view))
    }
}

/// Resolves every view bound in `table` concurrently.
pub async fn preload_all<R: ViewResolver>(
    resolver: &R,
    table: &RouteTable,
) -> Result<Vec<ResolvedView>, ViewLoadError> {
    try_join_all(table.views().into_iter().map(|view| resolver.resolve(view))).await
}
