use anyhow::Result;
use serde_json::json;

use plantsafe::domain::entities::Session;
use plantsafe::domain::services::current_quarter_colour;
use plantsafe::presentation::cli::{lifting_update, Ga1Command, LiftingCommand};
use plantsafe::presentation::AppContext;
use plantsafe::PlantsafeError;

use crate::ui::blocks::summary::ResultSummary;
use crate::ui::context::UiContext;
use crate::ui::views::registers::{render_lifting_items, render_static_record, render_static_records};

use super::emit_json;

pub fn cmd_ga1(
    app: &AppContext,
    ui: &UiContext,
    session: Option<&Session>,
    command: Ga1Command,
) -> Result<()> {
    let equipment = app.equipment();
    let now = app.now();
    let due_soon = app.config().compliance.static_due_soon_days;

    match command {
        Ga1Command::List => {
            let records = equipment.list_static_records()?;
            if ui.json {
                return emit_json("ga1_records", &json!({ "records": records }));
            }
            print!("{}", render_static_records(&records, now, due_soon, ui.color));
        }
        Ga1Command::Show { plant_id } => {
            let record = equipment
                .static_record(&plant_id)?
                .ok_or(PlantsafeError::StaticRecordNotFound { plant_id })?;
            if ui.json {
                return emit_json("ga1_record", &record);
            }
            print!(
                "{}",
                render_static_record(&record, now, due_soon, ui.color, ui.unicode)
            );
        }
        Ga1Command::Set { plant_id, fields } => {
            let record = fields.into_record(plant_id, session.map(|s| s.name.clone()));
            let saved = equipment.save_static_record(record, now)?;
            if ui.json {
                return emit_json("ga1_saved", &saved);
            }
            let summary = ResultSummary::success(format!(
                "GA1 saved for {} {}",
                saved.plant_id, saved.plant_name
            ));
            print!("{}", summary.render(ui.color, ui.unicode));
        }
        Ga1Command::Remove { plant_id } => {
            equipment.remove_static_record(&plant_id)?;
            if ui.json {
                return emit_json("ga1_removed", &json!({ "plantId": plant_id }));
            }
            let summary = ResultSummary::success(format!("GA1 record removed for {}", plant_id));
            print!("{}", summary.render(ui.color, ui.unicode));
        }
    }
    Ok(())
}

pub fn cmd_lifting(app: &AppContext, ui: &UiContext, command: LiftingCommand) -> Result<()> {
    let equipment = app.equipment();
    let now = app.now();
    let current = current_quarter_colour(now).colour;

    match command {
        LiftingCommand::List => {
            let items = equipment.list_lifting_items()?;
            if ui.json {
                return emit_json(
                    "lifting_items",
                    &json!({ "currentColour": current, "items": items }),
                );
            }
            let due_soon = app.config().compliance.lifting_due_soon_days;
            print!("{}", render_lifting_items(&items, current, now, due_soon, ui.color));
        }
        LiftingCommand::Add(args) => {
            let item = equipment.add_lifting_item(args.into_new_item(current), now)?;
            if ui.json {
                return emit_json("lifting_added", &item);
            }
            let mut summary = ResultSummary::success(format!("Added {} {}", item.id, item.description));
            if item.colour_code != current {
                summary.add_warning(format!(
                    "Tagged {} but this quarter's colour is {}",
                    item.colour_code, current
                ));
            }
            print!("{}", summary.render(ui.color, ui.unicode));
        }
        LiftingCommand::Update {
            id,
            description,
            location,
            last_exam,
            next_exam,
            colour,
            status,
            cert_ref,
            notes,
        } => {
            let update = lifting_update(
                description,
                location,
                last_exam,
                next_exam,
                colour,
                status,
                cert_ref,
                notes,
            );
            let item = equipment.update_lifting_item(&id, update, now)?;
            if ui.json {
                return emit_json("lifting_updated", &item);
            }
            let summary = ResultSummary::success(format!("Updated {} {}", item.id, item.description));
            print!("{}", summary.render(ui.color, ui.unicode));
        }
        LiftingCommand::Remove { id } => {
            let item = equipment.remove_lifting_item(&id)?;
            if ui.json {
                return emit_json("lifting_removed", &item);
            }
            let summary = ResultSummary::success(format!("Removed {} {}", item.id, item.description));
            print!("{}", summary.render(ui.color, ui.unicode));
        }
    }
    Ok(())
}
