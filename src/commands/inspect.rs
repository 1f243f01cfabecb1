use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::json;

use plantsafe::application::SubmitRequest;
use plantsafe::domain::entities::{AnswerResult, ChecklistAnswer, FormTemplate, Session};
use plantsafe::domain::value_objects::FormId;
use plantsafe::presentation::AppContext;

use crate::ui::context::UiContext;
use crate::ui::views::activity::{render_submissions, render_submit_outcome};

use super::emit_json;

pub struct SubmitArgs {
    pub plant: String,
    pub form: FormId,
    pub answers: Option<PathBuf>,
    pub failed: Vec<String>,
    pub notes: Option<String>,
}

fn read_answers(path: &Path) -> Result<Vec<ChecklistAnswer>> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read answers from {}", path.display()))?
    };
    serde_json::from_str(&content)
        .with_context(|| format!("invalid answers JSON in {}", path.display()))
}

/// Every template item, passed
fn all_pass(template: &FormTemplate) -> Vec<ChecklistAnswer> {
    template
        .sections
        .iter()
        .flat_map(|section| {
            section.items.iter().map(|item| ChecklistAnswer {
                section: Some(section.title.clone()),
                item: item.clone(),
                result: AnswerResult::Pass,
                note: None,
            })
        })
        .collect()
}

/// Apply `ITEM[=NOTE]` failures, replacing any existing answer for the item
fn apply_failures(answers: &mut Vec<ChecklistAnswer>, failed: &[String]) {
    for spec in failed {
        let (item, note) = match spec.split_once('=') {
            Some((item, note)) => (item.trim(), Some(note.trim().to_string())),
            None => (spec.trim(), None),
        };
        match answers.iter_mut().find(|a| a.item.eq_ignore_ascii_case(item)) {
            Some(answer) => {
                answer.result = AnswerResult::Fail;
                answer.note = note;
            }
            None => answers.push(ChecklistAnswer {
                section: None,
                item: item.to_string(),
                result: AnswerResult::Fail,
                note,
            }),
        }
    }
}

pub fn cmd_submit(
    app: &AppContext,
    ui: &UiContext,
    session: Option<&Session>,
    args: SubmitArgs,
) -> Result<()> {
    let mut answers = match &args.answers {
        Some(path) => read_answers(path)?,
        None => app
            .equipment()
            .form_template(args.form)?
            .map(|template| all_pass(&template))
            .unwrap_or_default(),
    };
    apply_failures(&mut answers, &args.failed);

    let request = SubmitRequest {
        plant_id: args.plant,
        form_id: args.form,
        answers,
        submitted_by: session.map(|s| s.name.clone()),
        notes: args.notes,
    };
    let outcome = app.submissions().submit(request, app.now())?;
    let queued = app.sync().pending()?;

    if ui.json {
        return emit_json("submitted", &json!({ "outcome": outcome, "queued": queued }));
    }
    print!("{}", render_submit_outcome(&outcome, queued, ui.color, ui.unicode));
    Ok(())
}

pub fn cmd_submissions(
    app: &AppContext,
    ui: &UiContext,
    plant: Option<&str>,
    days: Option<i64>,
) -> Result<()> {
    let submissions = app.submissions();
    let mut list = match days {
        Some(days) => submissions.within(app.now(), days)?,
        None => submissions.list()?,
    };
    if let Some(plant_id) = plant {
        list.retain(|s| s.plant_id == plant_id);
    }

    if ui.json {
        return emit_json("submissions", &json!({ "submissions": list }));
    }
    print!("{}", render_submissions(&list, ui.color));
    Ok(())
}
