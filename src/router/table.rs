//! Static route table.

use crate::router::paths;
use crate::router::views::ViewId;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// One route record: a path bound to a view, a layout wrapping its children,
/// or a redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub view: Option<ViewId>,
    pub layout: Option<ViewId>,
    pub redirect: Option<&'static str>,
    pub children: Vec<RouteEntry>,
}

impl RouteEntry {
    pub fn leaf(path: &'static str, view: ViewId) -> Self {
        Self {
            path,
            view: Some(view),
            layout: None,
            redirect: None,
            children: Vec::new(),
        }
    }

    pub fn layout(path: &'static str, layout: ViewId) -> Self {
        Self {
            path,
            view: None,
            layout: Some(layout),
            redirect: None,
            children: Vec::new(),
        }
    }

    pub fn redirect_to(mut self, target: &'static str) -> Self {
        self.redirect = Some(target);
        self
    }

    pub fn with_children(mut self, children: Vec<RouteEntry>) -> Self {
        self.children = children;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A matched route, with the layout of its enclosing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMatch {
    pub path: &'static str,
    pub view: Option<ViewId>,
    pub layout: Option<ViewId>,
    pub redirect: Option<&'static str>,
    pub leaf: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    RelativePath(&'static str),
    DuplicatePath(&'static str),
    LeafWithoutView(&'static str),
    ParentWithView(&'static str),
    SharedView(ViewId),
    RedirectToUnknown {
        from: &'static str,
        to: &'static str,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RelativePath(path) => write!(f, "route path `{path}` is not absolute"),
            Self::DuplicatePath(path) => write!(f, "route path `{path}` is declared twice"),
            Self::LeafWithoutView(path) => write!(f, "leaf route `{path}` has no view"),
            Self::ParentWithView(path) => {
                write!(f, "route `{path}` has children and a view of its own")
            }
            Self::SharedView(view) => write!(f, "view `{view}` is bound to more than one route"),
            Self::RedirectToUnknown { from, to } => {
                write!(f, "route `{from}` redirects to unknown path `{to}`")
            }
        }
    }
}

impl std::error::Error for TableError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    // Depth-first flattening of `entries`, in declaration order.
    flat: Vec<RouteMatch>,
}

impl RouteTable {
    pub fn new(entries: Vec<RouteEntry>) -> Self {
        let mut flat = Vec::new();
        flatten(&entries, None, &mut flat);
        Self { entries, flat }
    }

    /// The application's routes.
    pub fn standard() -> Self {
        Self::new(vec![
            RouteEntry::leaf(paths::LOGIN, ViewId::LoginPage),
            RouteEntry::layout(paths::ROOT, ViewId::LayoutContainer)
                .redirect_to(paths::HOME)
                .with_children(vec![
                    RouteEntry::leaf(paths::WORK_ONE, ViewId::WorkOne),
                    RouteEntry::leaf(paths::WORK_TWO, ViewId::WorkTwo),
                    RouteEntry::leaf(paths::USER_AVATAR, ViewId::UserAvatar),
                    RouteEntry::leaf(paths::USER_PASSWORD, ViewId::UserPassword),
                    RouteEntry::leaf(paths::USER_PROFILE, ViewId::UserProfile),
                ]),
        ])
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Exact, case-sensitive match ignoring query, fragment and trailing slash.
    pub fn lookup(&self, location: &str) -> Option<RouteMatch> {
        let path = paths::normalize(location);
        self.flat.iter().find(|m| m.path == path).copied()
    }

    pub fn contains(&self, location: &str) -> bool {
        self.lookup(location).is_some()
    }

    pub fn routes(&self) -> impl Iterator<Item = &RouteMatch> {
        self.flat.iter()
    }

    pub fn leaves(&self) -> impl Iterator<Item = &RouteMatch> {
        self.flat.iter().filter(|m| m.leaf)
    }

    /// Every view and layout the table binds, without duplicates.
    pub fn views(&self) -> Vec<ViewId> {
        let mut seen = HashSet::new();
        self.flat
            .iter()
            .flat_map(|m| [m.layout, m.view])
            .flatten()
            .filter(|view| seen.insert(*view))
            .collect()
    }

    pub fn validate(&self) -> Result<(), TableError> {
        let mut paths_seen = HashSet::new();
        let mut views_seen: HashMap<ViewId, &'static str> = HashMap::new();

        for m in &self.flat {
            if !m.path.starts_with('/') {
                return Err(TableError::RelativePath(m.path));
            }
            if !paths_seen.insert(m.path) {
                return Err(TableError::DuplicatePath(m.path));
            }
            match (m.leaf, m.view) {
                (true, None) if m.redirect.is_none() => {
                    return Err(TableError::LeafWithoutView(m.path));
                }
                (false, Some(_)) => return Err(TableError::ParentWithView(m.path)),
                (_, Some(view)) => {
                    if views_seen.insert(view, m.path).is_some() {
                        return Err(TableError::SharedView(view));
                    }
                }
                _ => {}
            }
        }

        let mut layouts = Vec::new();
        declared_layouts(&self.entries, &mut layouts);
        for (layout, path) in layouts {
            if views_seen.insert(layout, path).is_some() {
                return Err(TableError::SharedView(layout));
            }
        }

        for m in &self.flat {
            if let Some(to) = m.redirect {
                if !paths_seen.contains(paths::normalize(to)) {
                    return Err(TableError::RedirectToUnknown { from: m.path, to });
                }
            }
        }
        Ok(())
    }
}

fn flatten(entries: &[RouteEntry], layout: Option<ViewId>, out: &mut Vec<RouteMatch>) {
    for entry in entries {
        out.push(RouteMatch {
            path: entry.path,
            view: entry.view,
            layout: entry.layout.or(layout),
            redirect: entry.redirect,
            leaf: entry.is_leaf(),
        });
        flatten(&entry.children, entry.layout.or(layout), out);
    }
}

// Layouts declared by a record itself, not inherited from its parent.
fn declared_layouts(entries: &[RouteEntry], out: &mut Vec<(ViewId, &'static str)>) {
    for entry in entries {
        if let Some(layout) = entry.layout {
            out.push((layout, entry.path));
        }
        declared_layouts(&entry.children, out);
    }
}
