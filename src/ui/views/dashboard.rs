use serde::Serialize;

use plantsafe::domain::entities::{IssueSummary, Session};
use plantsafe::domain::services::QuarterColour;
use plantsafe::domain::value_objects::SiteId;

use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

use super::compliance::{render_counts, render_tag};

/// Register totals shown on the dashboard tiles
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub site: SiteId,
    pub signed_in: Option<Session>,
    pub plants: usize,
    pub out_of_service: usize,
    pub lifting_items: usize,
    pub submissions_today: usize,
    pub open_defects: usize,
    pub unread_notifications: usize,
    pub quarter: QuarterColour,
    pub compliance: IssueSummary,
}

pub fn render_dashboard(view: &DashboardView, supports_color: bool, supports_unicode: bool) -> String {
    let style = if view.compliance.danger > 0 {
        BoxStyle::Error
    } else if view.compliance.warning > 0 {
        BoxStyle::Warning
    } else {
        BoxStyle::Success
    };

    let title = ColoredText::info(format!("Site {}", view.site))
        .bold()
        .render(supports_color);
    let mut b = Box::with_title(title).style(style);
    if let Some(session) = &view.signed_in {
        b.add_line(ColoredText::dim(format!("{} ({})", session.name, session.role.label())).render(supports_color));
    }
    b.add_empty();
    b.add_line(format!("Plant             {} ({} out of service)", view.plants, view.out_of_service));
    b.add_line(format!("Lifting gear      {}", view.lifting_items));
    b.add_line(format!("Checks today      {}", view.submissions_today));
    b.add_line(format!("Open defects      {}", view.open_defects));
    b.add_line(format!("Unread alerts     {}", view.unread_notifications));
    b.add_empty();
    b.add_line(format!("Tag colour        {}", render_tag(view.quarter, supports_color, supports_unicode)));
    b.add_line(format!("Compliance        {}", render_counts(&view.compliance, supports_color)));
    b.render(supports_color, supports_unicode)
}
