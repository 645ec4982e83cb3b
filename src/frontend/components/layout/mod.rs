//! The layout container wrapping every signed-in route.

pub mod main;
pub mod navigation;

pub use main::LayoutContainer;
pub use navigation::Navigation;
