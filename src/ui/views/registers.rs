use chrono::{DateTime, Utc};

use plantsafe::domain::entities::{LiftingItem, StaticSafetyRecord};
use plantsafe::domain::value_objects::{ColourCode, LiftingStatus};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::table::Table;

use super::{due_cell, or_dash};

pub fn render_static_records(
    records: &[StaticSafetyRecord],
    now: DateTime<Utc>,
    due_soon_days: i64,
    supports_color: bool,
) -> String {
    if records.is_empty() {
        return "No GA1 records\n".to_string();
    }

    let mut table = Table::new(["PLANT", "NAME", "NEXT INSPECTION", "INSURANCE", "CERTIFICATE"]);
    for record in records {
        table.add_row(vec![
            record.plant_id.clone(),
            record.plant_name.clone(),
            due_cell(record.next_inspection_due.as_deref(), now, due_soon_days, supports_color),
            due_cell(record.insurance_expiry.as_deref(), now, due_soon_days, supports_color),
            due_cell(record.cert_expiry.as_deref(), now, due_soon_days, supports_color),
        ]);
    }
    table.render(supports_color)
}

pub fn render_static_record(
    record: &StaticSafetyRecord,
    now: DateTime<Utc>,
    due_soon_days: i64,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let due = |value: &Option<String>| due_cell(value.as_deref(), now, due_soon_days, supports_color);

    let mut header = CommandHeader::new(
        Icon::Info,
        format!("GA1 {} {}", record.plant_id, record.plant_name),
    );
    header.add("Make", or_dash(record.make.as_deref()));
    header.add("Model", or_dash(record.model.as_deref()));
    header.add("Serial no", or_dash(record.serial_no.as_deref()));
    header.add("Year", or_dash(record.year_of_manufacture.as_deref()));
    header.add("Last inspection", or_dash(record.last_inspection_date.as_deref()));
    header.add("Next inspection", due(&record.next_inspection_due));
    header.add("Inspector", or_dash(record.inspector_name.as_deref()));
    header.add("Insurance expiry", due(&record.insurance_expiry));
    header.add("Certificate expiry", due(&record.cert_expiry));
    header.add("Certificate ref", or_dash(record.cert_ref.as_deref()));
    header.add("Risk assessment", or_dash(record.risk_assessment_ref.as_deref()));
    header.add("Licence", or_dash(record.licence_required.as_deref()));
    if let Some(notes) = record.notes.as_deref() {
        header.add("Notes", notes);
    }
    if let Some(by) = record.saved_by.as_deref() {
        header.add("Saved by", by);
    }
    header.render(supports_color, supports_unicode)
}

fn lifting_status_cell(status: LiftingStatus, supports_color: bool) -> String {
    match status {
        LiftingStatus::Active => status.to_string(),
        LiftingStatus::OutOfService => ColoredText::error(status.as_str()).render(supports_color),
        LiftingStatus::Retired => ColoredText::dim(status.as_str()).render(supports_color),
    }
}

pub fn render_lifting_items(
    items: &[LiftingItem],
    current: ColourCode,
    now: DateTime<Utc>,
    due_soon_days: i64,
    supports_color: bool,
) -> String {
    if items.is_empty() {
        return "No lifting equipment registered\n".to_string();
    }

    let mut table = Table::new(["ID", "CATEGORY", "DESCRIPTION", "SWL", "NEXT EXAM", "TAG", "STATUS"]);
    for item in items {
        let tag = if item.status.is_active() && item.colour_code != current {
            ColoredText::warning(format!("{} (expected {})", item.colour_code, current))
                .render(supports_color)
        } else {
            item.colour_code.to_string()
        };
        let next_exam = if item.status.is_active() {
            due_cell(item.next_thorough_exam.as_deref(), now, due_soon_days, supports_color)
        } else {
            or_dash(item.next_thorough_exam.as_deref()).to_string()
        };
        table.add_row(vec![
            item.id.clone(),
            item.category.clone(),
            item.description.clone(),
            item.swl_display().unwrap_or_else(|| "-".to_string()),
            next_exam,
            tag,
            lifting_status_cell(item.status, supports_color),
        ]);
    }
    table.render(supports_color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use plantsafe::domain::entities::NewLiftingItem;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 12, 8, 0, 0).unwrap()
    }

    fn item(id: &str, next_exam: &str, colour: ColourCode, status: LiftingStatus) -> LiftingItem {
        let mut item = LiftingItem::register(
            id.to_string(),
            NewLiftingItem {
                category: "Shackle".to_string(),
                description: "Bow shackle 3.25t".to_string(),
                swl: Some(3250.0),
                swl_unit: Some("kg".to_string()),
                make: None,
                model: None,
                serial_no: None,
                year_of_manufacture: None,
                last_thorough_exam: None,
                next_thorough_exam: Some(next_exam.to_string()),
                colour_code: colour,
                location: None,
                cert_ref: None,
            },
            now(),
        );
        item.status = status;
        item
    }

    #[test]
    fn lifting_list_flags_wrong_tags_on_active_gear_only() {
        let items = [
            item("LFT-001", "2026-10-01", ColourCode::Yellow, LiftingStatus::Active),
            item("LFT-002", "2026-05-30", ColourCode::Green, LiftingStatus::Active),
            item("LFT-003", "2026-01-10", ColourCode::Green, LiftingStatus::Retired),
        ];
        insta::assert_snapshot!(render_lifting_items(&items, ColourCode::Yellow, now(), 30, false), @r"
        ID       CATEGORY  DESCRIPTION        SWL      NEXT EXAM            TAG                      STATUS
        LFT-001  Shackle   Bow shackle 3.25t  3250 kg  2026-10-01           yellow                   active
        LFT-002  Shackle   Bow shackle 3.25t  3250 kg  2026-05-30 (in 18d)  green (expected yellow)  active
        LFT-003  Shackle   Bow shackle 3.25t  3250 kg  2026-01-10           green                    retired
        ");
    }

    #[test]
    fn ga1_list_marks_overdue_dates() {
        let mut record = StaticSafetyRecord::new("PLT-003", "Tower Crane TC1");
        record.next_inspection_due = Some("2026-05-08".to_string());
        record.insurance_expiry = Some("2027-01-01".to_string());

        let rendered = render_static_records(&[record], now(), 14, false);
        assert!(rendered.contains("2026-05-08 (4d overdue)"), "{}", rendered);
        assert!(rendered.contains("2027-01-01"));
        assert!(rendered.lines().nth(1).unwrap().ends_with('-'));
    }
}
