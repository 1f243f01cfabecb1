use chrono::{DateTime, Utc};

use plantsafe::domain::entities::{Defect, FormTemplate, Plant, StaticSafetyRecord, Submission};
use plantsafe::domain::services::same_calendar_day;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::table::Table;

use super::{or_dash, stamp};

fn status_cell(plant: &Plant, now: DateTime<Utc>, supports_color: bool) -> String {
    if plant.is_out_of_service() {
        return ColoredText::error("out of service").render(supports_color);
    }
    match plant.last_inspected {
        Some(at) if same_calendar_day(at, now) => {
            ColoredText::success("checked today").render(supports_color)
        }
        Some(at) => at.format("%Y-%m-%d").to_string(),
        None => ColoredText::dim("never").render(supports_color),
    }
}

pub fn render_plant_list(plants: &[Plant], now: DateTime<Utc>, supports_color: bool) -> String {
    if plants.is_empty() {
        return "No plant registered\n".to_string();
    }

    let mut table = Table::new(["ID", "NAME", "TYPE", "LOCATION", "DAILY FORM", "LAST CHECK"]);
    for plant in plants {
        table.add_row(vec![
            plant.id.clone(),
            plant.name.clone(),
            or_dash(Some(plant.category.as_str())).to_string(),
            or_dash(Some(plant.location.as_str())).to_string(),
            plant.daily_form().to_string(),
            status_cell(plant, now, supports_color),
        ]);
    }
    table.render(supports_color)
}

pub struct PlantDetail<'a> {
    pub plant: &'a Plant,
    pub record: Option<&'a StaticSafetyRecord>,
    pub submissions: &'a [Submission],
    pub open_defects: &'a [Defect],
}

pub fn render_plant_detail(
    detail: &PlantDetail<'_>,
    now: DateTime<Utc>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let plant = detail.plant;
    let mut header = CommandHeader::new(Icon::Info, format!("{} {}", plant.id, plant.name));
    header.add("Type", or_dash(Some(plant.category.as_str())));
    header.add("Location", or_dash(Some(plant.location.as_str())));
    header.add(
        "Forms",
        plant
            .applicable_forms()
            .iter()
            .map(|f| f.to_string())
            .collect::<Vec<_>>()
            .join(", "),
    );
    header.add("Last check", status_cell(plant, now, supports_color));
    if let Some(oos) = &plant.out_of_service {
        header.add(
            "Out of service",
            format!("{} ({}, {})", oos.reason, oos.set_by, stamp(oos.set_at)),
        );
    }
    if let Some(record) = detail.record {
        header.add(
            "GA1 next due",
            or_dash(record.next_inspection_due.as_deref()),
        );
    }

    let mut out = header.render(supports_color, supports_unicode);

    if !detail.open_defects.is_empty() {
        out.push('\n');
        for defect in detail.open_defects {
            out.push_str(&format!(
                "{} {} {}\n",
                Icon::Warning.colored(supports_color, supports_unicode),
                ColoredText::dim(defect.id.as_str()).render(supports_color),
                defect.description
            ));
        }
    }

    if !detail.submissions.is_empty() {
        out.push('\n');
        out.push_str(&ColoredText::dim("Recent submissions").render(supports_color));
        out.push('\n');
        for submission in detail.submissions.iter().take(5) {
            out.push_str(&format!(
                "  {}  {:<10} {}\n",
                stamp(submission.submitted_at),
                submission.form_id.to_string(),
                submission.submitted_by.as_deref().unwrap_or("-")
            ));
        }
    }
    out
}

pub fn render_form_list(templates: &[FormTemplate], supports_color: bool) -> String {
    let mut table = Table::new(["FORM", "NAME", "ITEMS"]);
    for template in templates {
        table.add_row(vec![
            template.id.to_string(),
            template.name.clone(),
            template.item_count().to_string(),
        ]);
    }
    table.render(supports_color)
}

pub fn render_form(template: &FormTemplate, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        ColoredText::info(template.id.to_string()).bold().render(supports_color),
        template.name
    );
    if !template.description.is_empty() {
        out.push_str(&format!("{}\n", ColoredText::dim(template.description.as_str()).render(supports_color)));
    }
    for section in &template.sections {
        out.push_str(&format!("\n{}\n", section.title));
        for item in &section.items {
            out.push_str(&format!(
                "  {} {}\n",
                Icon::Pending.render(supports_unicode),
                item
            ));
        }
    }
    out
}
