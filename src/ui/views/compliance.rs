use crossterm::style::Stylize;

use plantsafe::application::ComplianceReport;
use plantsafe::domain::entities::{Issue, IssueSummary, LiftingItem};
use plantsafe::domain::services::QuarterColour;
use plantsafe::domain::value_objects::Severity;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;

pub fn render_compliance_report(
    report: &ComplianceReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n",
        ColoredText::info("Compliance").bold().render(supports_color),
        ColoredText::dim(report.evaluated_at.format("%Y-%m-%d %H:%M UTC").to_string())
            .render(supports_color)
    ));
    out.push_str(&format!(
        "Tag colour this quarter: {}\n\n",
        render_tag(report.quarter, supports_color, supports_unicode)
    ));

    if report.issues.is_empty() {
        out.push_str(&format!(
            "{} {}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            ColoredText::success("All plant and lifting gear compliant").render(supports_color)
        ));
        return out;
    }

    for issue in &report.issues {
        out.push_str(&render_issue(issue, supports_color, supports_unicode));
    }
    out.push('\n');
    out.push_str(&render_counts(&report.summary, supports_color));
    out.push('\n');
    out
}

pub fn render_issue(issue: &Issue, supports_color: bool, supports_unicode: bool) -> String {
    let label = match issue.severity {
        Severity::Danger => ColoredText::error(issue.subject_label.as_str()),
        Severity::Warning => ColoredText::warning(issue.subject_label.as_str()),
        Severity::Info => ColoredText::info(issue.subject_label.as_str()),
    };
    format!(
        "{} {} {}\n    {}\n",
        Icon::for_severity(issue.severity).colored(supports_color, supports_unicode),
        label.bold().render(supports_color),
        ColoredText::dim(format!("({})", issue.subject_id)).render(supports_color),
        issue.description
    )
}

/// "2 danger, 1 warning, 0 info"
pub fn render_counts(summary: &IssueSummary, supports_color: bool) -> String {
    let part = |n: usize, label: &str, text: fn(String) -> ColoredText| {
        let s = format!("{} {}", n, label);
        if n == 0 {
            ColoredText::dim(s).render(supports_color)
        } else {
            text(s).render(supports_color)
        }
    };
    [
        part(summary.danger, "danger", ColoredText::error),
        part(summary.warning, "warning", ColoredText::warning),
        part(summary.info, "info", ColoredText::info),
    ]
    .join(", ")
}

pub fn render_tag(quarter: QuarterColour, supports_color: bool, supports_unicode: bool) -> String {
    let swatch = Icon::Tag.render(supports_unicode);
    let swatch = if supports_color {
        format!("{}", swatch.with(theme::tag_color(quarter.colour)))
    } else {
        swatch.to_string()
    };
    format!(
        "{} {} ({})",
        swatch,
        quarter.colour.as_str().to_uppercase(),
        quarter.label
    )
}

/// The `colour` command: this quarter's tag plus active gear still wearing an old one
pub fn render_colour_check(
    quarter: QuarterColour,
    mismatched: &[&LiftingItem],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "Tag colour this quarter: {}\n",
        render_tag(quarter, supports_color, supports_unicode)
    );
    if mismatched.is_empty() {
        out.push_str(&format!(
            "{} All active lifting gear carries the current tag\n",
            Icon::Success.colored(supports_color, supports_unicode)
        ));
        return out;
    }

    out.push('\n');
    for item in mismatched {
        out.push_str(&format!(
            "{} {} {} tagged {}\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            item.id,
            item.description,
            item.colour_code
        ));
    }
    out
}
