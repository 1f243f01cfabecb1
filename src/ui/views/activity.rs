use plantsafe::application::SubmitOutcome;
use plantsafe::domain::entities::{Defect, Notification, NotificationKind, Site, Submission};
use plantsafe::domain::value_objects::SiteId;

use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::table::Table;

use super::stamp;

pub fn render_submissions(submissions: &[Submission], supports_color: bool) -> String {
    if submissions.is_empty() {
        return "No submissions recorded\n".to_string();
    }

    let mut table = Table::new(["SUBMITTED", "PLANT", "FORM", "BY", "FAILED"]);
    for submission in submissions {
        let failed = submission.failed_answers().count();
        let failed = if failed == 0 {
            ColoredText::dim("0").render(supports_color)
        } else {
            ColoredText::error(failed.to_string()).render(supports_color)
        };
        table.add_row(vec![
            stamp(submission.submitted_at),
            submission.plant_id.clone(),
            submission.form_id.to_string(),
            submission.submitted_by.clone().unwrap_or_else(|| "-".to_string()),
            failed,
        ]);
    }
    table.render(supports_color)
}

pub fn render_submit_outcome(
    outcome: &SubmitOutcome,
    queued: usize,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let submission = &outcome.submission;
    let title = format!("{} recorded for {}", submission.form_id, submission.plant_id);
    let mut summary = if outcome.defects.is_empty() {
        ResultSummary::success(title)
    } else {
        ResultSummary::partial(title)
    };

    summary.add_stat("checklist answers", submission.answers.len());
    for defect in &outcome.defects {
        summary.add_warning(format!("Defect {}: {}", defect.id, defect.description));
    }
    if queued > 0 {
        summary.add_info(format!("{} waiting to sync", queued));
        summary.with_next_step("plantsafe sync");
    }
    summary.render(supports_color, supports_unicode)
}

pub fn render_defects(defects: &[Defect], supports_color: bool) -> String {
    if defects.is_empty() {
        return "No defects\n".to_string();
    }

    let mut table = Table::new(["ID", "PLANT", "REPORTED", "STATUS", "DESCRIPTION"]);
    for defect in defects {
        let status = if defect.is_open() {
            ColoredText::error("open").render(supports_color)
        } else {
            ColoredText::success("resolved").render(supports_color)
        };
        table.add_row(vec![
            defect.id.clone(),
            defect.plant_id.clone(),
            stamp(defect.reported_at),
            status,
            defect.description.clone(),
        ]);
    }
    table.render(supports_color)
}

pub fn render_notifications(feed: &[Notification], supports_color: bool, supports_unicode: bool) -> String {
    if feed.is_empty() {
        return "No notifications\n".to_string();
    }

    let mut out = String::new();
    for note in feed {
        let icon = match note.kind {
            NotificationKind::Success => Icon::Success,
            NotificationKind::Error => Icon::Error,
            NotificationKind::Warning => Icon::Warning,
            NotificationKind::Info => Icon::Info,
        };
        let title = if note.read {
            ColoredText::plain(note.title.as_str())
        } else {
            ColoredText::plain(note.title.as_str()).bold()
        };
        out.push_str(&format!(
            "{} {} {}\n",
            icon.colored(supports_color, supports_unicode),
            title.render(supports_color),
            ColoredText::dim(stamp(note.created_at)).render(supports_color)
        ));
        if !note.message.is_empty() {
            out.push_str(&format!("    {}\n", note.message));
        }
    }
    out
}

pub fn render_sites(sites: &[Site], current: &SiteId, supports_color: bool) -> String {
    let mut table = Table::new(["", "SITE", "NAME", "CREATED"]);
    for site in sites {
        let marker = if &site.id == current { "*" } else { "" };
        table.add_row(vec![
            marker.to_string(),
            site.id.to_string(),
            site.name.clone(),
            site.created_at.format("%Y-%m-%d").to_string(),
        ]);
    }
    table.render(supports_color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use plantsafe::domain::entities::{AnswerResult, ChecklistAnswer, DefectStatus};
    use plantsafe::domain::value_objects::FormId;

    fn submission() -> Submission {
        Submission {
            id: "SUB-1".to_string(),
            plant_id: "PLT-001".to_string(),
            form_id: FormId::HazardAssessment,
            submitted_at: Utc.with_ymd_and_hms(2026, 5, 12, 7, 30, 0).unwrap(),
            submitted_by: Some("J. Smith".to_string()),
            answers: vec![
                ChecklistAnswer {
                    section: None,
                    item: "Brakes".to_string(),
                    result: AnswerResult::Fail,
                    note: Some("spongy".to_string()),
                },
                ChecklistAnswer {
                    section: None,
                    item: "Horn".to_string(),
                    result: AnswerResult::Pass,
                    note: None,
                },
            ],
            notes: None,
        }
    }

    #[test]
    fn submissions_table_counts_failures() {
        insta::assert_snapshot!(render_submissions(&[submission()], false), @r"
        SUBMITTED         PLANT    FORM  BY        FAILED
        2026-05-12 07:30  PLT-001  GA3   J. Smith  1
        ");
    }

    #[test]
    fn read_notifications_are_not_bold() {
        let at = Utc.with_ymd_and_hms(2026, 5, 12, 7, 30, 0).unwrap();
        let feed = vec![Notification {
            id: "N-1".to_string(),
            title: "Defect reported".to_string(),
            message: "Brakes: spongy".to_string(),
            kind: NotificationKind::Warning,
            created_at: at,
            read: true,
        }];
        insta::assert_snapshot!(render_notifications(&feed, false, false), @r"
        [!] Defect reported 2026-05-12 07:30
            Brakes: spongy
        ");
    }

    #[test]
    fn resolved_defects_show_status() {
        let defect = Defect {
            id: "DEF-1".to_string(),
            plant_id: "PLT-001".to_string(),
            submission_id: None,
            description: "Cracked mirror".to_string(),
            reported_by: None,
            reported_at: Utc.with_ymd_and_hms(2026, 5, 1, 9, 0, 0).unwrap(),
            status: DefectStatus::Resolved,
            resolved_at: None,
            resolved_by: None,
            resolve_notes: None,
        };
        let rendered = render_defects(&[defect], false);
        assert!(rendered.contains("resolved  Cracked mirror"), "{}", rendered);
    }
}
