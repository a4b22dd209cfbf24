//! # Console Commands
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (guard + dispatch)
//! ├── session.rs    ◄─── login, logout, status, open
//! ├── products.rs   ◄─── /products
//! ├── customers.rs  ◄─── /customers
//! └── sales.rs      ◄─── /sales (invoices and lines)
//! ```
//!
//! ## Guarded Dispatch
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  salesdesk sales list                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  RouteGuard::navigate_to(current, Route::Sales)                        │
//! │       │                                                                 │
//! │       ├── lands on Login  ──► "not signed in" (command never runs)     │
//! │       ├── Login ──► Home  ──► "already signed in" (login skipped)      │
//! │       └── lands on target ──► command runs                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod customers;
pub mod products;
pub mod sales;
pub mod session;

use anyhow::{bail, Result};
use salesdesk_core::Route;
use serde::Serialize;

use crate::cli::Command;
use crate::context::AppContext;

/// Result of running the guard ahead of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Proceed,
    /// Login was requested while a session exists.
    AlreadySignedIn,
}

/// Route the user is "on" before the command: Home with a session, Login without.
pub fn current_route(ctx: &AppContext) -> Result<Route> {
    Ok(if ctx.guard.auth_state()?.is_authenticated() {
        Route::Home
    } else {
        Route::Login
    })
}

/// Runs the guard for a view command.
pub fn gate(ctx: &AppContext, target: Route) -> Result<Gate> {
    let outcome = ctx.guard.navigate_to(current_route(ctx)?, target)?;
    match (outcome.redirected_from, outcome.target) {
        (None, _) => Ok(Gate::Proceed),
        (Some(_), Route::Home) => Ok(Gate::AlreadySignedIn),
        (Some(requested), _) => bail!(
            "not signed in: {} requires a session; run `salesdesk login <email> <password>` first",
            requested
        ),
    }
}

pub async fn run(ctx: &AppContext, command: Command) -> Result<()> {
    if let Some(target) = command.route() {
        if gate(ctx, target)? == Gate::AlreadySignedIn {
            return session::already_signed_in(ctx);
        }
    }

    match command {
        Command::Login { email, password } => session::login(ctx, &email, &password).await,
        Command::Logout => session::logout(ctx),
        Command::Status => session::status(ctx),
        Command::Open { path } => session::open(ctx, &path),
        Command::Products(cmd) => products::run(ctx, cmd.command).await,
        Command::Customers(cmd) => customers::run(ctx, cmd.command).await,
        Command::Sales(cmd) => sales::run(ctx, cmd.command).await,
    }
}

/// Pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Treats blank optional flags as absent.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use salesdesk_client::ClientConfig;

    fn context(dir: &std::path::Path) -> AppContext {
        let mut config = ClientConfig::with_base_url("http://127.0.0.1:1");
        config.storage.data_dir = Some(dir.to_path_buf());
        AppContext::from_config(&config).unwrap()
    }

    #[test]
    fn test_gate_blocks_views_without_session() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path());

        let err = gate(&ctx, Route::Sales).unwrap_err();
        assert!(err.to_string().contains("not signed in"));
        assert_eq!(gate(&ctx, Route::Login).unwrap(), Gate::Proceed);
    }

    #[test]
    fn test_gate_with_session() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path());
        ctx.session().set_auth_data(Some("t"), Some("u")).unwrap();

        assert_eq!(gate(&ctx, Route::Products).unwrap(), Gate::Proceed);
        assert_eq!(gate(&ctx, Route::Login).unwrap(), Gate::AlreadySignedIn);
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("  ".into())), None);
        assert_eq!(non_blank(Some(" x ".into())), Some("x".into()));
    }
}
