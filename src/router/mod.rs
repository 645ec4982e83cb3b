//! Client-side routing: the route table, the authentication guard and the
//! navigator that ties them together.

pub mod guard;
pub mod navigator;
pub mod paths;
pub mod table;
pub mod views;

pub use guard::{AuthGuard, GuardDecision, NavigationGuard};
pub use navigator::{Navigation, NavigationError, Navigator, OpenedView};
pub use table::{RouteEntry, RouteMatch, RouteTable, TableError};
pub use views::{ResolvedView, StaticViewResolver, ViewId, ViewLoadError, ViewResolver};
