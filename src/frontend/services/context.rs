//! Authentication context and state management.

use dioxus::prelude::*;
use std::rc::Rc;
use workdesk::router::{AuthGuard, Navigator};
use workdesk::session::{SessionContext, TokenStore};

/// Navigator shared through the component tree.
pub type AppNavigator = Rc<Navigator<AuthGuard<TokenStore>>>;

#[derive(Clone, Copy)]
pub struct AuthState {
    pub is_authenticated: Signal<bool>,
    store: CopyValue<TokenStore>,
}

impl AuthState {
    pub fn new(store: TokenStore) -> Self {
        Self {
            is_authenticated: Signal::new(store.has_token()),
            store: CopyValue::new(store),
        }
    }

    /// Stores the token and marks the session as authenticated.
    pub async fn login(&mut self, token: String) -> Result<(), String> {
        let store = self.store.cloned();
        if let Err(e) = store.login(token).await {
            log::warn!("Login failed: {e}");
            return Err(e.to_string());
        }
        self.is_authenticated.set(true);
        Ok(())
    }

    /// Logs out the current user. Stays signed in when the saved session
    /// cannot be removed.
    pub async fn logout(&mut self) -> Result<(), String> {
        let store = self.store.cloned();
        if let Err(e) = store.logout().await {
            log::error!("Failed to clear the saved session: {e}");
            return Err(e.to_string());
        }
        self.is_authenticated.set(false);
        Ok(())
    }
}
