use anyhow::Result;

use plantsafe::presentation::AppContext;

use crate::ui::blocks::summary::ResultSummary;
use crate::ui::context::UiContext;

use super::emit_json;

pub fn cmd_sync(app: &AppContext, ui: &UiContext) -> Result<()> {
    let sync = app.sync();
    let report = sync.drain()?;
    let remaining = sync.pending()?;

    if ui.json {
        return emit_json(
            "sync",
            &serde_json::json!({
                "synced": report.synced,
                "failed": report.failed,
                "dropped": report.dropped,
                "remaining": remaining,
            }),
        );
    }

    let mut summary = if report.failed == 0 && report.dropped == 0 {
        ResultSummary::success("Sync complete")
    } else {
        ResultSummary::partial("Sync incomplete")
    };
    summary.add_stat("submissions delivered", report.synced);
    if report.failed > 0 {
        summary.add_warning(format!("{} will be retried", report.failed));
    }
    if report.dropped > 0 {
        summary.add_warning(format!("{} dropped after too many attempts", report.dropped));
    }
    if remaining > 0 {
        summary.with_next_step("plantsafe sync");
    }
    print!("{}", summary.render(ui.color, ui.unicode));
    Ok(())
}
