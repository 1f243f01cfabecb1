//! One `cmd_*` function per subcommand.
//!
//! Every command receives the wired [`AppContext`] and the terminal
//! [`UiContext`]; access is checked once in [`dispatch`] before it runs.

pub mod auth;
pub mod compliance;
pub mod defects;
pub mod init;
pub mod inspect;
pub mod plant;
pub mod registers;
pub mod sync;

use anyhow::Result;
use serde::Serialize;

use plantsafe::application::provisioning;
use plantsafe::domain::entities::Session;
use plantsafe::domain::value_objects::Page;
use plantsafe::presentation::cli::{PinCommand, SiteCommand};
use plantsafe::presentation::{output, AppContext, Commands};
use plantsafe::PlantsafeError;

use crate::ui::context::UiContext;

/// What a command needs before it may run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
    Open,
    Session,
    Page(Page),
}

fn access_for(command: &Commands) -> Access {
    match command {
        Commands::Init { .. }
        | Commands::Login { .. }
        | Commands::Logout
        | Commands::Colour => Access::Open,
        Commands::Whoami
        | Commands::Pin(PinCommand::Change { .. })
        | Commands::Forms { .. }
        | Commands::Submit { .. }
        | Commands::Sync => Access::Session,
        Commands::Pin(PinCommand::Set { .. }) => Access::Page(Page::PinManagement),
        Commands::Site(_) | Commands::Reset { .. } => Access::Page(Page::Settings),
        Commands::Plant(_) | Commands::Ga1(_) | Commands::Lifting(_) => Access::Page(Page::Plants),
        Commands::Submissions { .. } => Access::Page(Page::Submissions),
        Commands::Compliance { .. } => Access::Page(Page::Compliance),
        Commands::Defect(_) => Access::Page(Page::Defects),
        Commands::Notifications { .. } => Access::Page(Page::Notifications),
        Commands::Dashboard => Access::Page(Page::Dashboard),
    }
}

fn needs_provisioned_site(command: &Commands) -> bool {
    !matches!(
        command,
        Commands::Init { .. } | Commands::Site(SiteCommand::List) | Commands::Colour
    )
}

/// The session a command runs under, if any
fn authorize(command: &Commands, app: &AppContext) -> Result<Option<Session>> {
    let auth = app.auth();
    if !app.config().auth.require_login {
        return Ok(auth.current()?);
    }

    let session = match access_for(command) {
        Access::Open => auth.current()?,
        Access::Session => Some(auth.require_session()?),
        Access::Page(page) => Some(auth.require(page)?),
    };
    Ok(session)
}

pub fn dispatch(command: Commands, app: &AppContext, ui: &UiContext) -> Result<()> {
    if needs_provisioned_site(&command) && !provisioning::is_provisioned(app.store())? {
        return Err(PlantsafeError::NotProvisioned {
            site: app.site().clone(),
        }
        .into());
    }

    let session = authorize(&command, app)?;
    let session = session.as_ref();
    tracing::debug!(site = %app.site(), role = ?session.map(|s| s.role), "dispatching");

    match command {
        Commands::Init { demo, name } => init::cmd_init(app, ui, demo, name.as_deref()),
        Commands::Reset { yes } => init::cmd_reset(app, ui, yes),
        Commands::Site(command) => init::cmd_site(app, ui, command),

        Commands::Login { role, name, pin } => auth::cmd_login(app, ui, role, name, pin),
        Commands::Logout => auth::cmd_logout(app, ui),
        Commands::Whoami => auth::cmd_whoami(app, ui, session),
        Commands::Pin(command) => auth::cmd_pin(app, ui, session, command),

        Commands::Plant(command) => plant::cmd_plant(app, ui, session, command),
        Commands::Forms { plant, show } => plant::cmd_forms(app, ui, plant.as_deref(), show),

        Commands::Ga1(command) => registers::cmd_ga1(app, ui, session, command),
        Commands::Lifting(command) => registers::cmd_lifting(app, ui, command),

        Commands::Submit {
            plant,
            form,
            answers,
            failed,
            notes,
        } => inspect::cmd_submit(
            app,
            ui,
            session,
            inspect::SubmitArgs {
                plant,
                form,
                answers,
                failed,
                notes,
            },
        ),
        Commands::Submissions { plant, days } => {
            inspect::cmd_submissions(app, ui, plant.as_deref(), days)
        }

        Commands::Compliance { notify } => compliance::cmd_compliance(app, ui, notify),
        Commands::Colour => compliance::cmd_colour(app, ui),
        Commands::Dashboard => compliance::cmd_dashboard(app, ui, session),

        Commands::Defect(command) => defects::cmd_defect(app, ui, session, command),
        Commands::Notifications { mark_read } => defects::cmd_notifications(app, ui, mark_read),

        Commands::Sync => sync::cmd_sync(app, ui),
    }
}

/// Name recorded against changes: the session name, else "cli"
fn actor(session: Option<&Session>) -> String {
    session
        .map(|s| s.name.clone())
        .unwrap_or_else(|| "cli".to_string())
}

/// Write one JSON event for `command` to stdout
fn emit_json(name: &str, payload: &impl Serialize) -> Result<()> {
    crate::ui::json::emit(output::event(name, payload)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use plantsafe::presentation::cli::PlantCommand;

    #[test]
    fn sign_in_commands_are_always_open() {
        assert_eq!(access_for(&Commands::Logout), Access::Open);
        assert_eq!(access_for(&Commands::Colour), Access::Open);
    }

    #[test]
    fn register_commands_need_the_plants_page() {
        assert_eq!(
            access_for(&Commands::Plant(PlantCommand::List)),
            Access::Page(Page::Plants)
        );
        assert_eq!(
            access_for(&Commands::Pin(PinCommand::Set {
                role: plantsafe::domain::value_objects::Role::Operator,
                pin: None,
            })),
            Access::Page(Page::PinManagement)
        );
    }

    #[test]
    fn filling_a_form_needs_only_a_session() {
        let submit = Commands::Submit {
            plant: "PLT-001".to_string(),
            form: plantsafe::domain::value_objects::FormId::HazardAssessment,
            answers: None,
            failed: Vec::new(),
            notes: None,
        };
        assert_eq!(access_for(&submit), Access::Session);
    }

    #[test]
    fn site_listing_works_before_init() {
        assert!(!needs_provisioned_site(&Commands::Site(SiteCommand::List)));
        assert!(needs_provisioned_site(&Commands::Dashboard));
    }
}
