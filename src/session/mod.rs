//! Session state consulted by the navigation guard.

pub mod store;

pub use store::{SessionRecord, TokenStore};

use std::rc::Rc;
use std::sync::Arc;

/// Read-only view of the current session.
pub trait SessionContext {
    /// Whether a session token is currently held.
    fn has_token(&self) -> bool;
}

impl<T: SessionContext + ?Sized> SessionContext for &T {
    fn has_token(&self) -> bool {
        (**self).has_token()
    }
}

impl<T: SessionContext + ?Sized> SessionContext for Arc<T> {
    fn has_token(&self) -> bool {
        (**self).has_token()
    }
}

impl<T: SessionContext + ?Sized> SessionContext for Rc<T> {
    fn has_token(&self) -> bool {
        (**self).has_token()
    }
}
