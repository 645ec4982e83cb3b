//! Pre-navigation guards.

use crate::router::paths;
use crate::session::SessionContext;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(String),
    Cancel,
}

/// Runs before every navigation attempt and decides where it goes.
pub trait NavigationGuard {
    fn before_each(&self, to: &str) -> GuardDecision;
}

impl<F> NavigationGuard for F
where
    F: Fn(&str) -> GuardDecision,
{
    fn before_each(&self, to: &str) -> GuardDecision {
        self(to)
    }
}

/// Sends visitors without a session token to the login page.
#[derive(Debug, Clone)]
pub struct AuthGuard<S> {
    session: S,
}

impl<S: SessionContext> AuthGuard<S> {
    pub const fn new(session: S) -> Self {
        Self { session }
    }

    pub const fn session(&self) -> &S {
        &self.session
    }
}

impl<S: SessionContext> NavigationGuard for AuthGuard<S> {
    fn before_each(&self, to: &str) -> GuardDecision {
        if !self.session.has_token() && to != paths::LOGIN {
            log::debug!("No session token, redirecting {to} to {}", paths::LOGIN);
            return GuardDecision::Redirect(paths::LOGIN.to_string());
        }
        GuardDecision::Allow
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::TokenStore;
    use rstest::rstest;

    #[rstest]
    #[case("/")]
    #[case("/works/workOne")]
    #[case("/user/profile")]
    #[case("/nowhere")]
    #[case("/login/extra")]
    fn anonymous_visits_go_to_login(#[case] to: &str) {
        let guard = AuthGuard::new(TokenStore::in_memory());
        assert_eq!(
            guard.before_each(to),
            GuardDecision::Redirect(paths::LOGIN.to_string())
        );
    }

    #[test]
    fn login_is_always_reachable() {
        let guard = AuthGuard::new(TokenStore::in_memory());
        assert_eq!(guard.before_each(paths::LOGIN), GuardDecision::Allow);
    }

    #[rstest]
    #[case("/")]
    #[case("/login")]
    #[case("/user/password")]
    #[case("/nowhere")]
    fn token_holders_pass(#[case] to: &str) {
        let guard = AuthGuard::new(TokenStore::with_token("t"));
        assert_eq!(guard.before_each(to), GuardDecision::Allow);
    }

    #[tokio::test]
    async fn reads_the_session_on_every_attempt() {
        let store = TokenStore::in_memory();
        let guard = AuthGuard::new(store.clone());
        assert_ne!(guard.before_each("/user/avatar"), GuardDecision::Allow);

        store.login("fresh").await.unwrap();
        assert_eq!(guard.before_each("/user/avatar"), GuardDecision::Allow);

        store.logout().await.unwrap();
        assert_ne!(guard.before_each("/user/avatar"), GuardDecision::Allow);
    }

    #[test]
    fn closures_are_guards() {
        let cancel_all = |_: &str| GuardDecision::Cancel;
        assert_eq!(cancel_all.before_each("/"), GuardDecision::Cancel);
    }
}
