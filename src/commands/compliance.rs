use anyhow::Result;
use serde_json::json;

use plantsafe::domain::entities::Session;
use plantsafe::domain::services::{colour_mismatches, current_quarter_colour, same_calendar_day};
use plantsafe::presentation::AppContext;

use crate::ui::context::UiContext;
use crate::ui::views::compliance::{render_colour_check, render_compliance_report};
use crate::ui::views::dashboard::{render_dashboard, DashboardView};

use super::emit_json;

pub fn cmd_compliance(app: &AppContext, ui: &UiContext, notify: bool) -> Result<()> {
    let now = app.now();
    let compliance = app.compliance();
    let report = compliance.report(now)?;
    let posted = if notify {
        compliance.notify_danger(now)?
    } else {
        Vec::new()
    };

    if ui.json {
        emit_json("compliance", &report)?;
        if notify {
            emit_json("notified", &json!({ "notifications": posted }))?;
        }
        return Ok(());
    }

    print!("{}", render_compliance_report(&report, ui.color, ui.unicode));
    if notify {
        println!("{} notification(s) posted", posted.len());
    }
    Ok(())
}

pub fn cmd_colour(app: &AppContext, ui: &UiContext) -> Result<()> {
    let quarter = current_quarter_colour(app.now());
    let items = app.equipment().list_lifting_items()?;
    let mismatched: Vec<_> = colour_mismatches(&items, quarter.colour).collect();

    if ui.json {
        let ids: Vec<&str> = mismatched.iter().map(|i| i.id.as_str()).collect();
        return emit_json(
            "colour",
            &json!({
                "colour": quarter.colour,
                "label": quarter.label,
                "hex": quarter.colour.hex(),
                "mismatched": ids,
            }),
        );
    }
    print!(
        "{}",
        render_colour_check(quarter, &mismatched, ui.color, ui.unicode)
    );
    Ok(())
}

pub fn cmd_dashboard(app: &AppContext, ui: &UiContext, session: Option<&Session>) -> Result<()> {
    let now = app.now();
    let plants = app.equipment().list_plants()?;
    let report = app.compliance().report(now)?;
    let submissions_today = app
        .submissions()
        .within(now, 1)?
        .iter()
        .filter(|s| same_calendar_day(s.submitted_at, now))
        .count();

    let view = DashboardView {
        site: app.site().clone(),
        signed_in: session.cloned(),
        plants: plants.len(),
        out_of_service: plants.iter().filter(|p| p.is_out_of_service()).count(),
        lifting_items: app.equipment().list_lifting_items()?.len(),
        submissions_today,
        open_defects: app.defects().open_defects()?.len(),
        unread_notifications: app.notifications().unread_count()?,
        quarter: report.quarter,
        compliance: report.summary,
    };

    if ui.json {
        return emit_json("dashboard", &view);
    }
    print!("{}", render_dashboard(&view, ui.color, ui.unicode));
    Ok(())
}
