//! # SalesDesk Console
//!
//! Command-line frontend for the SalesDesk backend.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Console Startup                                │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter, written to stderr             │
//! │     • Default: WARN, INFO for salesdesk crates; override with RUST_LOG  │
//! │                                                                         │
//! │  2. Parse Arguments ──────────────────────────────────────────────────► │
//! │     • clap derive, SALESDESK_CONFIG / SALESDESK_PASSWORD from env       │
//! │                                                                         │
//! │  3. Build Context ────────────────────────────────────────────────────► │
//! │     • ClientConfig: defaults → TOML file → SALESDESK_* env → flags      │
//! │     • FileStore session shared by ApiClient and RouteGuard              │
//! │                                                                         │
//! │  4. Dispatch ─────────────────────────────────────────────────────────► │
//! │     • Route guard first, then the command                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```text
//! salesdesk login ada@example.com secret
//! salesdesk products list
//! salesdesk sales create --invoice-number INV-1 --customer-id c1 --line p1:2:4.00
//! salesdesk open /sales
//! salesdesk logout
//! ```

mod cli;
mod commands;
mod context;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use context::AppContext;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let ctx = AppContext::build(&cli)?;
    commands::run(&ctx, cli.command).await
}

/// Initializes the tracing subscriber.
///
/// ## Environment Variables
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=salesdesk_client=trace` - Trace the HTTP layer only
/// - Default: WARN, INFO for salesdesk crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            EnvFilter::new("warn,salesdesk_console=info,salesdesk_client=info,salesdesk_store=info")
        });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
