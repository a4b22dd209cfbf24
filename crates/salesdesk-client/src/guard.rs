//! # Route Guard
//!
//! Runs before every navigation and applies
//! [`decide_redirect`](salesdesk_core::decide_redirect) with the auth state
//! read fresh from the session.
//!
//! ```text
//! navigate(from, "/sales")
//!     │
//!     ├── resolve path ──► Route::Sales
//!     ├── session.is_authenticated() ──► AuthState
//!     └── decide_redirect ──► None ─────────► land on Sales
//!                         └── Some(Login) ──► land on Login (redirected_from: Sales)
//! ```

use salesdesk_core::{decide_redirect, AuthState, Route};
use salesdesk_store::SessionStore;
use tracing::debug;

use crate::error::ClientResult;

/// Where a navigation ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationOutcome {
    pub from: Route,
    /// Route the navigation lands on.
    pub target: Route,
    /// The route originally asked for, when the guard redirected.
    pub redirected_from: Option<Route>,
}

impl NavigationOutcome {
    pub fn was_redirected(&self) -> bool {
        self.redirected_from.is_some()
    }
}

/// Navigation guard over the route table.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    session: SessionStore,
}

impl RouteGuard {
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }

    /// Current auth state, read from storage.
    pub fn auth_state(&self) -> ClientResult<AuthState> {
        Ok(AuthState::from_authenticated(
            self.session.is_authenticated()?,
        ))
    }

    /// Resolves `to_path` and applies the guard.
    pub fn navigate(&self, from: Route, to_path: &str) -> ClientResult<NavigationOutcome> {
        self.navigate_to(from, Route::resolve(to_path))
    }

    /// Applies the guard to an already resolved route.
    pub fn navigate_to(&self, from: Route, to: Route) -> ClientResult<NavigationOutcome> {
        let state = self.auth_state()?;

        let outcome = match decide_redirect(state, to) {
            Some(redirect) => {
                debug!(from = %from, requested = %to, target = %redirect, "Navigation redirected");
                NavigationOutcome {
                    from,
                    target: redirect,
                    redirected_from: Some(to),
                }
            }
            None => NavigationOutcome {
                from,
                target: to,
                redirected_from: None,
            },
        };
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use salesdesk_store::MemoryStore;

    #[test]
    fn test_unauthenticated_is_sent_to_login() {
        let guard = RouteGuard::new(SessionStore::new(MemoryStore::new()));
        let outcome = guard.navigate(Route::Login, "/sales").unwrap();
        assert_eq!(outcome.target, Route::Login);
        assert_eq!(outcome.redirected_from, Some(Route::Sales));
    }

    #[test]
    fn test_authenticated_login_goes_home() {
        let session = SessionStore::new(MemoryStore::new());
        session.set_auth_data(Some("t"), Some("u")).unwrap();
        let guard = RouteGuard::new(session);

        let outcome = guard.navigate(Route::Products, "/login").unwrap();
        assert_eq!(outcome.target, Route::Home);
        assert!(outcome.was_redirected());
    }

    #[test]
    fn test_unknown_path_lands_on_login() {
        let guard = RouteGuard::new(SessionStore::new(MemoryStore::new()));
        let outcome = guard.navigate(Route::Home, "/nowhere").unwrap();
        assert_eq!(outcome.target, Route::Login);
        assert!(!outcome.was_redirected());
    }

    #[test]
    fn test_state_is_read_on_every_navigation() {
        let storage = MemoryStore::new();
        let guard = RouteGuard::new(SessionStore::new(storage.clone()));

        assert_eq!(
            guard.navigate(Route::Login, "/customers").unwrap().target,
            Route::Login
        );

        // Login happens through a different handle
        SessionStore::new(storage.clone())
            .set_auth_data(Some("t"), None)
            .unwrap();
        let outcome = guard.navigate(Route::Login, "/customers").unwrap();
        assert_eq!(outcome.target, Route::Customers);
        assert!(!outcome.was_redirected());

        SessionStore::new(storage).clear_auth_data().unwrap();
        assert_eq!(
            guard.navigate(Route::Customers, "/").unwrap().target,
            Route::Login
        );
    }
}
