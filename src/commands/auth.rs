use std::io::BufRead;

use anyhow::{bail, Result};
use serde_json::json;

use plantsafe::domain::entities::Session;
use plantsafe::domain::policies;
use plantsafe::domain::value_objects::Role;
use plantsafe::presentation::cli::PinCommand;
use plantsafe::presentation::AppContext;
use plantsafe::PlantsafeError;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

use super::emit_json;

/// `--pin` wins; otherwise prompt on a terminal or read one line from stdin
fn read_pin(ui: &UiContext, given: Option<String>, prompt: &str) -> Result<String> {
    if let Some(pin) = given {
        return Ok(pin);
    }

    if ui.interactive() {
        return Ok(dialoguer::Password::new().with_prompt(prompt).interact()?);
    }

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    let pin = line.trim().to_string();
    if pin.is_empty() {
        bail!("no PIN given\n  → Pass --pin or pipe the PIN on stdin");
    }
    Ok(pin)
}

fn signed_in(session: Option<&Session>) -> Result<&Session> {
    Ok(session.ok_or(PlantsafeError::NotSignedIn)?)
}

pub fn cmd_login(
    app: &AppContext,
    ui: &UiContext,
    role: Role,
    name: Option<String>,
    pin: Option<String>,
) -> Result<()> {
    let pin = read_pin(ui, pin, &format!("{} PIN", role.label()))?;
    let session = app.auth().login(role, &pin, name, app.now())?;

    if ui.json {
        return emit_json("login", &session);
    }
    let summary = ResultSummary::success(format!("Signed in as {} ({})", session.name, role.label()));
    print!("{}", summary.render(ui.color, ui.unicode));
    Ok(())
}

pub fn cmd_logout(app: &AppContext, ui: &UiContext) -> Result<()> {
    let previous = app.auth().current()?;
    app.auth().logout()?;

    if ui.json {
        return emit_json("logout", &json!({ "was": previous }));
    }
    match previous {
        Some(session) => println!("Signed out {}", session.name),
        None => println!("Not signed in"),
    }
    Ok(())
}

pub fn cmd_whoami(app: &AppContext, ui: &UiContext, session: Option<&Session>) -> Result<()> {
    let session = signed_in(session)?;
    let pages = policies::pages_for(session.role);

    if ui.json {
        return emit_json(
            "whoami",
            &json!({ "site": app.site(), "session": session, "pages": pages }),
        );
    }

    let mut header = CommandHeader::new(Icon::Info, session.name.as_str());
    header.add("Role", session.role.label());
    header.add("Site", app.site().to_string());
    header.add("Since", session.login_at.format("%Y-%m-%d %H:%M").to_string());
    header.add(
        "Pages",
        pages.iter().map(|p| p.as_str()).collect::<Vec<_>>().join(", "),
    );
    print!("{}", header.render(ui.color, ui.unicode));
    Ok(())
}

pub fn cmd_pin(
    app: &AppContext,
    ui: &UiContext,
    session: Option<&Session>,
    command: PinCommand,
) -> Result<()> {
    let session = signed_in(session)?;
    let auth = app.auth();

    let target = match command {
        PinCommand::Change { old, new } => {
            let old = read_pin(ui, old, "Current PIN")?;
            let new = read_pin(ui, new, "New PIN")?;
            auth.change_pin(session.role, &old, &new)?;
            session.role
        }
        PinCommand::Set { role, pin } => {
            let pin = read_pin(ui, pin, &format!("New PIN for {}", role.label()))?;
            auth.admin_change_pin(session.role, role, &pin)?;
            role
        }
    };

    if ui.json {
        return emit_json("pin_changed", &json!({ "role": target }));
    }
    let summary = ResultSummary::success(format!("PIN updated for {}", target.label()));
    print!("{}", summary.render(ui.color, ui.unicode));
    Ok(())
}
