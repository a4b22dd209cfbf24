//! Session commands: login, logout, status, open.

use anyhow::Result;
use salesdesk_core::validation::validate_email;
use serde::Serialize;

use super::{current_route, print_json};
use crate::context::AppContext;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionStatus {
    authenticated: bool,
    user_id: Option<String>,
    landing: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OpenReport {
    requested: String,
    landing: &'static str,
    view: &'static str,
    redirected: bool,
}

pub async fn login(ctx: &AppContext, email: &str, password: &str) -> Result<()> {
    validate_email(email)?;
    let session = ctx.client.auth().login(email.trim(), password).await?;
    println!(
        "Signed in as {}",
        session.user_id.as_deref().unwrap_or(email.trim())
    );
    Ok(())
}

pub fn already_signed_in(ctx: &AppContext) -> Result<()> {
    let user = ctx.session().user_id()?;
    println!(
        "Already signed in as {}; run `salesdesk logout` first to switch users",
        user.as_deref().unwrap_or("unknown user")
    );
    Ok(())
}

pub fn logout(ctx: &AppContext) -> Result<()> {
    ctx.client.auth().logout()?;
    println!("Signed out");
    Ok(())
}

pub fn status(ctx: &AppContext) -> Result<()> {
    let session = ctx.session().load()?;
    print_json(&SessionStatus {
        authenticated: session.is_authenticated(),
        user_id: session.user_id,
        landing: current_route(ctx)?.path(),
    })
}

pub fn open(ctx: &AppContext, path: &str) -> Result<()> {
    let outcome = ctx.guard.navigate(current_route(ctx)?, path)?;
    print_json(&OpenReport {
        requested: path.to_string(),
        landing: outcome.target.path(),
        view: outcome.target.name(),
        redirected: outcome.was_redirected(),
    })
}
