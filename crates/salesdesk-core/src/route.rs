//! # Route Table
//!
//! Declarative navigation table and the pure guard decision.
//!
//! ## Table Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  /                 layout          requiresAuth ──┐ (inherited)         │
//! │  ├── ""            Dashboard  (Home)              │                     │
//! │  ├── products      Products                       │                     │
//! │  ├── customers     Customers                      │                     │
//! │  └── sales         Sales   ◄──────────────────────┘                     │
//! │  /login            Login           public                               │
//! │  /*                catch-all ──► Login                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Guard Decision
//! ```text
//!   requires auth  &&  unauthenticated   ──► redirect Login
//!   target Login   &&  authenticated     ──► redirect Home
//!   otherwise                            ──► proceed
//! ```
//! The two rules never fire on their own redirect target, so a redirect is
//! final after one hop.

use std::fmt;

// =============================================================================
// Route
// =============================================================================

/// A named navigable destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Dashboard at `/`.
    Home,
    Products,
    Customers,
    Sales,
    Login,
}

impl Route {
    /// Every route, in table order.
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::Products,
        Route::Customers,
        Route::Sales,
        Route::Login,
    ];

    /// Absolute path of the route.
    pub const fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Products => "/products",
            Route::Customers => "/customers",
            Route::Sales => "/sales",
            Route::Login => "/login",
        }
    }

    /// Display name of the view behind the route.
    pub const fn name(&self) -> &'static str {
        match self {
            Route::Home => "Dashboard",
            Route::Products => "Products",
            Route::Customers => "Customers",
            Route::Sales => "Sales",
            Route::Login => "Login",
        }
    }

    /// Whether the route, or any ancestor in the table, requires auth.
    pub fn requires_auth(&self) -> bool {
        let segments = split_path(self.path());
        walk(ROUTES, &segments, false)
            .map(|(_, auth)| auth)
            .unwrap_or(false)
    }

    /// Resolves a path against the table.
    ///
    /// Query strings, fragments and trailing slashes are ignored. Anything
    /// the table does not know falls through to the catch-all (`Login`).
    pub fn resolve(path: &str) -> Route {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let segments = split_path(path);
        walk(ROUTES, &segments, false)
            .map(|(route, _)| route)
            .unwrap_or(Route::Login)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

// =============================================================================
// Route Table
// =============================================================================

/// One entry of the route table.
#[derive(Debug)]
pub struct RouteDef {
    /// Single path segment relative to the parent; empty for index/layout.
    pub path: &'static str,
    /// Destination, or `None` for a pure layout entry.
    pub route: Option<Route>,
    /// Applies to this entry and every descendant.
    pub requires_auth: bool,
    pub children: &'static [RouteDef],
}

/// The application route table.
pub static ROUTES: &[RouteDef] = &[
    RouteDef {
        path: "",
        route: None,
        requires_auth: true,
        children: &[
            RouteDef {
                path: "",
                route: Some(Route::Home),
                requires_auth: false,
                children: &[],
            },
            RouteDef {
                path: "products",
                route: Some(Route::Products),
                requires_auth: false,
                children: &[],
            },
            RouteDef {
                path: "customers",
                route: Some(Route::Customers),
                requires_auth: false,
                children: &[],
            },
            RouteDef {
                path: "sales",
                route: Some(Route::Sales),
                requires_auth: false,
                children: &[],
            },
        ],
    },
    RouteDef {
        path: "login",
        route: Some(Route::Login),
        requires_auth: false,
        children: &[],
    },
];

fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Depth-first match; returns the route and its inherited auth flag.
fn walk(defs: &[RouteDef], segments: &[&str], inherited: bool) -> Option<(Route, bool)> {
    for def in defs {
        let auth = inherited || def.requires_auth;

        let rest = if def.path.is_empty() {
            segments
        } else {
            match segments.split_first() {
                Some((head, rest)) if head.eq_ignore_ascii_case(def.path) => rest,
                _ => continue,
            }
        };

        if !def.children.is_empty() {
            if let Some(hit) = walk(def.children, rest, auth) {
                return Some(hit);
            }
            continue;
        }

        if rest.is_empty() {
            if let Some(route) = def.route {
                return Some((route, auth));
            }
        }
    }
    None
}

// =============================================================================
// Guard Decision
// =============================================================================

/// Whether the current client holds a session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Authenticated,
    Unauthenticated,
}

impl AuthState {
    pub fn from_authenticated(authenticated: bool) -> Self {
        if authenticated {
            AuthState::Authenticated
        } else {
            AuthState::Unauthenticated
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated)
    }
}

/// Decides where a navigation to `target` should go instead, if anywhere.
///
/// `None` means proceed to `target`.
pub fn decide_redirect(state: AuthState, target: Route) -> Option<Route> {
    if target.requires_auth() && !state.is_authenticated() {
        Some(Route::Login)
    } else if target == Route::Login && state.is_authenticated() {
        Some(Route::Home)
    } else {
        None
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
