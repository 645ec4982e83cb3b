//! Navigation: base path, record redirects, guard, unmatched policy.

use crate::config::{RouterConfig, UnmatchedPolicy};
use crate::router::guard::{GuardDecision, NavigationGuard};
use crate::router::paths;
use crate::router::table::RouteTable;
use crate::router::views::{ResolvedView, ViewId, ViewLoadError, ViewResolver};
use std::fmt;

/// Longest redirect chain followed before giving up.
pub const MAX_REDIRECTS: usize = 8;

/// Outcome of a successful navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// Path asked for, after base and query stripping.
    pub requested: String,
    /// Path navigated to.
    pub target: String,
    /// `None` when the target matched no route and the policy is blank.
    pub view: Option<ViewId>,
    pub layout: Option<ViewId>,
    pub redirected: bool,
}

impl Navigation {
    pub fn is_blank(&self) -> bool {
        self.view.is_none()
    }
}

/// A navigation whose views have been loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenedView {
    pub navigation: Navigation,
    pub layout: Option<ResolvedView>,
    pub view: Option<ResolvedView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    MalformedPath(String),
    NotFound(String),
    RedirectLoop { from: String, hops: usize },
    Cancelled(String),
    View(ViewLoadError),
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedPath(path) => write!(f, "malformed path `{path}`"),
            Self::NotFound(path) => write!(f, "no route matches `{path}`"),
            Self::RedirectLoop { from, hops } => {
                write!(f, "navigation to `{from}` redirected {hops} times without settling")
            }
            Self::Cancelled(path) => write!(f, "navigation to `{path}` was cancelled"),
            Self::View(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for NavigationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::View(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ViewLoadError> for NavigationError {
    fn from(err: ViewLoadError) -> Self {
        Self::View(err)
    }
}

#[derive(Debug, Clone)]
pub struct Navigator<G> {
    table: RouteTable,
    guard: G,
    base_path: String,
    unmatched: UnmatchedPolicy,
}

impl<G: NavigationGuard> Navigator<G> {
    pub fn new(table: RouteTable, guard: G, config: &RouterConfig) -> Self {
        Self {
            table,
            guard,
            base_path: paths::normalize_base(&config.base_path),
            unmatched: config.unmatched.clone(),
        }
    }

    pub const fn table(&self) -> &RouteTable {
        &self.table
    }

    pub const fn guard(&self) -> &G {
        &self.guard
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Resolves where a navigation to the full `location`, base path
    /// included, ends up.
    pub fn navigate(&self, location: &str) -> Result<Navigation, NavigationError> {
        self.navigate_route(&paths::strip_base(location, &self.base_path))
    }

    /// Like [`navigate`](Self::navigate) for a path already relative to the
    /// base, as handed out by the history engine.
    ///
    /// Record redirects apply before the guard sees the destination, and
    /// every guard redirect starts a fresh attempt that is guarded again.
    pub fn navigate_route(&self, path: &str) -> Result<Navigation, NavigationError> {
        let requested = self.locate(path)?;
        let mut current = requested.clone();
        let mut hops = 0;

        loop {
            if hops > MAX_REDIRECTS {
                log::warn!("Redirect loop while navigating to {requested}");
                return Err(NavigationError::RedirectLoop {
                    from: requested,
                    hops,
                });
            }

            let matched = self.table.lookup(&current);
            if let Some(target) = matched.and_then(|m| m.redirect) {
                current = target.to_string();
                hops += 1;
                continue;
            }

            match self.guard.before_each(&current) {
                GuardDecision::Allow => {}
                GuardDecision::Redirect(next) => {
                    current = self.locate(&next)?;
                    hops += 1;
                    continue;
                }
                GuardDecision::Cancel => {
                    log::debug!("Navigation to {current} cancelled by guard");
                    return Err(NavigationError::Cancelled(current));
                }
            }

            let (view, layout) = match matched {
                Some(m) => (m.view, m.layout),
                None => match &self.unmatched {
                    UnmatchedPolicy::Blank => (None, None),
                    UnmatchedPolicy::Reject => return Err(NavigationError::NotFound(current)),
                    UnmatchedPolicy::Redirect(fallback) => {
                        current = self.locate(fallback)?;
                        hops += 1;
                        continue;
                    }
                },
            };

            if hops > 0 {
                log::debug!("Navigation to {requested} settled on {current}");
            }
            return Ok(Navigation {
                requested,
                target: current,
                view,
                layout,
                redirected: hops > 0,
            });
        }
    }

    /// Navigates, then loads the layout and view of the target.
    pub async fn open<R: ViewResolver>(
        &self,
        location: &str,
        resolver: &R,
    ) -> Result<OpenedView, NavigationError> {
        let navigation = self.navigate(location)?;

        let layout = match navigation.layout {
            Some(layout) => Some(resolver.resolve(layout).await?),
            None => None,
        };
        let view = match navigation.view {
            Some(view) => Some(resolver.resolve(view).await.inspect_err(|e| {
                log::error!("Failed to open {}: {e}", navigation.target);
            })?),
            None => None,
        };

        Ok(OpenedView {
            navigation,
            layout,
            view,
        })
    }

    fn locate(&self, location: &str) -> Result<String, NavigationError> {
        let path = paths::normalize(location);
        if !paths::is_well_formed(path) {
            return Err(NavigationError::MalformedPath(location.to_string()));
        }
        Ok(path.to_string())
    }
}
