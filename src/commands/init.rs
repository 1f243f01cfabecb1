use anyhow::{bail, Result};
use serde_json::json;

use plantsafe::application::provisioning;
use plantsafe::presentation::cli::SiteCommand;
use plantsafe::presentation::AppContext;

use crate::ui::blocks::summary::ResultSummary;
use crate::ui::context::UiContext;
use crate::ui::views::activity::render_sites;

use super::emit_json;

pub fn cmd_init(app: &AppContext, ui: &UiContext, demo: bool, name: Option<&str>) -> Result<()> {
    let name = name.or(app.config().site.name.as_deref());
    let report = provisioning::provision(app.store(), name, demo, app.now())?;

    if ui.json {
        return emit_json(
            "init",
            &json!({
                "site": app.site(),
                "report": report,
            }),
        );
    }

    let mut summary = if report.changed_anything() {
        ResultSummary::success(format!("Site {} ready", app.site()))
    } else {
        ResultSummary::success(format!("Site {} already set up", app.site()))
    };
    if report.templates_installed > 0 {
        summary.add_stat("form templates installed", report.templates_installed);
    }
    if report.pins_installed {
        summary.add_info("Default PINs installed; change them with 'plantsafe pin change'");
    }
    if report.site_registered {
        summary.add_info("Site added to the directory");
    }
    if report.demo_loaded {
        summary.add_info("Demo register loaded");
    } else if demo {
        summary.add_warning("Demo data skipped: the register already has plant");
    }
    summary.with_next_step("plantsafe login site_manager");

    print!("{}", summary.render(ui.color, ui.unicode));
    Ok(())
}

pub fn cmd_reset(app: &AppContext, ui: &UiContext, yes: bool) -> Result<()> {
    if !yes {
        if !ui.interactive() {
            bail!("refusing to reset site '{}' without --yes", app.site());
        }
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(format!(
                "Delete every register of site '{}'? This cannot be undone",
                app.site()
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Reset cancelled");
            return Ok(());
        }
    }

    provisioning::reset_site(app.store())?;

    if ui.json {
        return emit_json("reset", &json!({ "site": app.site() }));
    }
    let mut summary = ResultSummary::success(format!("Site {} reset", app.site()));
    summary.with_next_step("plantsafe init");
    print!("{}", summary.render(ui.color, ui.unicode));
    Ok(())
}

pub fn cmd_site(app: &AppContext, ui: &UiContext, command: SiteCommand) -> Result<()> {
    match command {
        SiteCommand::List => {
            let sites = provisioning::list_sites(app.store())?;
            if ui.json {
                return emit_json("sites", &json!({ "current": app.site(), "sites": sites }));
            }
            if sites.is_empty() {
                println!("No sites yet. Run 'plantsafe init' to create '{}'", app.site());
            } else {
                print!("{}", render_sites(&sites, app.site(), ui.color));
            }
        }
        SiteCommand::Add { id, name } => {
            let site = provisioning::add_site(
                app.store(),
                id,
                name.as_deref().unwrap_or_default(),
                app.now(),
            )?;
            if ui.json {
                return emit_json("site_added", &site);
            }
            let mut summary = ResultSummary::success(format!("Site {} added", site.id));
            summary.with_next_step(format!("plantsafe --site {} init", site.id));
            print!("{}", summary.render(ui.color, ui.unicode));
        }
    }
    Ok(())
}
