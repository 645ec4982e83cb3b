//! UI components and layouts.

pub mod layout;
pub mod view_panel;

pub use view_panel::ViewPanel;
