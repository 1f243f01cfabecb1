use anyhow::{bail, Result};
use serde_json::json;

use plantsafe::domain::entities::Session;
use plantsafe::presentation::cli::DefectCommand;
use plantsafe::presentation::AppContext;
use plantsafe::PlantsafeError;

use crate::ui::blocks::summary::ResultSummary;
use crate::ui::context::UiContext;
use crate::ui::views::activity::{render_defects, render_notifications};

use super::{actor, emit_json};

fn cmd_defect_list(
    app: &AppContext,
    ui: &UiContext,
    plant: Option<&str>,
    open: bool,
) -> Result<()> {
    let defects = app.defects();
    let mut list = match plant {
        Some(plant_id) => defects.defects_for_plant(plant_id)?,
        None => defects.list()?,
    };
    if open {
        list.retain(|d| d.is_open());
    }

    if ui.json {
        return emit_json("defects", &json!({ "defects": list }));
    }
    print!("{}", render_defects(&list, ui.color));
    Ok(())
}

pub fn cmd_defect(
    app: &AppContext,
    ui: &UiContext,
    session: Option<&Session>,
    command: DefectCommand,
) -> Result<()> {
    let defects = app.defects();
    let now = app.now();

    match command {
        DefectCommand::List { plant, open } => {
            return cmd_defect_list(app, ui, plant.as_deref(), open);
        }
        DefectCommand::Add { plant, description } => {
            if description.trim().is_empty() {
                bail!("a defect needs a description");
            }
            let defect = defects.report(&plant, &description, session.map(|s| s.name.clone()), now)?;
            if ui.json {
                return emit_json("defect_reported", &defect);
            }
            let mut summary = ResultSummary::partial(format!("Defect {} logged", defect.id));
            summary.add_warning(format!("{}: {}", defect.plant_id, defect.description));
            print!("{}", summary.render(ui.color, ui.unicode));
        }
        DefectCommand::Resolve { id, notes } => {
            if !defects.resolve(&id, &actor(session), notes, now)? {
                return Err(PlantsafeError::DefectNotFound { id }.into());
            }
            if ui.json {
                return emit_json("defect_resolved", &json!({ "id": id }));
            }
            let summary = ResultSummary::success(format!("Defect {} resolved", id));
            print!("{}", summary.render(ui.color, ui.unicode));
        }
    }
    Ok(())
}

pub fn cmd_notifications(app: &AppContext, ui: &UiContext, mark_read: bool) -> Result<()> {
    let notifications = app.notifications();
    let feed = notifications.list()?;
    let marked = if mark_read {
        notifications.mark_all_read()?
    } else {
        0
    };

    if ui.json {
        return emit_json("notifications", &json!({ "notifications": feed, "markedRead": marked }));
    }
    print!("{}", render_notifications(&feed, ui.color, ui.unicode));
    if mark_read {
        println!("{} marked as read", marked);
    }
    Ok(())
}
