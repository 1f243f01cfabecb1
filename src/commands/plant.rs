use anyhow::{Context, Result};
use serde_json::json;

use plantsafe::domain::entities::Session;
use plantsafe::domain::value_objects::FormId;
use plantsafe::presentation::cli::{new_plant, plant_update, PlantCommand};
use plantsafe::presentation::AppContext;

use crate::ui::blocks::summary::ResultSummary;
use crate::ui::context::UiContext;
use crate::ui::views::plants::{
    render_form, render_form_list, render_plant_detail, render_plant_list, PlantDetail,
};

use super::{actor, emit_json};

pub fn cmd_plant(
    app: &AppContext,
    ui: &UiContext,
    session: Option<&Session>,
    command: PlantCommand,
) -> Result<()> {
    let equipment = app.equipment();
    let now = app.now();

    match command {
        PlantCommand::List => {
            let plants = equipment.list_plants()?;
            if ui.json {
                return emit_json("plants", &json!({ "plants": plants }));
            }
            print!("{}", render_plant_list(&plants, now, ui.color));
        }
        PlantCommand::Show { id } => {
            let plant = equipment.plant(&id)?;
            let record = equipment.static_record(&id)?;
            let submissions = app.submissions().for_plant(&id)?;
            let open_defects: Vec<_> = app
                .defects()
                .defects_for_plant(&id)?
                .into_iter()
                .filter(|d| d.is_open())
                .collect();

            if ui.json {
                return emit_json(
                    "plant",
                    &json!({
                        "plant": plant,
                        "ga1": record,
                        "submissions": submissions,
                        "openDefects": open_defects,
                    }),
                );
            }
            let detail = PlantDetail {
                plant: &plant,
                record: record.as_ref(),
                submissions: &submissions,
                open_defects: &open_defects,
            };
            print!("{}", render_plant_detail(&detail, now, ui.color, ui.unicode));
        }
        PlantCommand::Add {
            name,
            location,
            category,
            form_type,
        } => {
            let plant = equipment.add_plant(new_plant(name, location, category, form_type))?;
            if ui.json {
                return emit_json("plant_added", &plant);
            }
            let mut summary = ResultSummary::success(format!("Added {} {}", plant.id, plant.name));
            summary.add_info(format!("Daily pre-start: {}", plant.daily_form()));
            summary.with_next_step(format!("plantsafe ga1 set {} --next-due YYYY-MM-DD", plant.id));
            print!("{}", summary.render(ui.color, ui.unicode));
        }
        PlantCommand::Update {
            id,
            name,
            location,
            category,
            form_type,
            clear_form_type,
        } => {
            let update = plant_update(name, location, category, form_type, clear_form_type);
            let plant = equipment.update_plant(&id, update)?;
            if ui.json {
                return emit_json("plant_updated", &plant);
            }
            let summary = ResultSummary::success(format!("Updated {} {}", plant.id, plant.name));
            print!("{}", summary.render(ui.color, ui.unicode));
        }
        PlantCommand::Remove { id } => {
            let plant = equipment.remove_plant(&id)?;
            if ui.json {
                return emit_json("plant_removed", &plant);
            }
            let summary = ResultSummary::success(format!("Removed {} {}", plant.id, plant.name));
            print!("{}", summary.render(ui.color, ui.unicode));
        }
        PlantCommand::Oos { id, reason } => {
            let plant = equipment.set_out_of_service(&id, true, &reason, &actor(session), now)?;
            if ui.json {
                return emit_json("plant_out_of_service", &plant);
            }
            let mut summary = ResultSummary::partial(format!("{} {} out of service", plant.id, plant.name));
            summary.add_warning(reason);
            print!("{}", summary.render(ui.color, ui.unicode));
        }
        PlantCommand::Return { id } => {
            let plant = equipment.set_out_of_service(&id, false, "", &actor(session), now)?;
            if ui.json {
                return emit_json("plant_returned", &plant);
            }
            let summary =
                ResultSummary::success(format!("{} {} returned to service", plant.id, plant.name));
            print!("{}", summary.render(ui.color, ui.unicode));
        }
    }
    Ok(())
}

pub fn cmd_forms(
    app: &AppContext,
    ui: &UiContext,
    plant: Option<&str>,
    show: Option<FormId>,
) -> Result<()> {
    let equipment = app.equipment();

    if let Some(id) = show {
        let template = equipment
            .form_template(id)?
            .with_context(|| format!("no template installed for {}\n  → Run: plantsafe init", id))?;
        if ui.json {
            return emit_json("form", &template);
        }
        print!("{}", render_form(&template, ui.color, ui.unicode));
        return Ok(());
    }

    let templates = match plant {
        Some(plant_id) => equipment.forms_for_plant(plant_id)?,
        None => equipment.form_templates()?,
    };
    if ui.json {
        return emit_json("forms", &json!({ "plant": plant, "forms": templates }));
    }
    print!("{}", render_form_list(&templates, ui.color));
    Ok(())
}
