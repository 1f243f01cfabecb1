//! plantsafe - site plant inspection register and compliance checker
//!
//! Usage: plantsafe <COMMAND>
//!
//! Commands:
//!   init        Set up a site (add --demo for sample data)
//!   login       Sign in with a role PIN
//!   plant       Manage the plant register
//!   submit      Record a completed checklist
//!   compliance  Evaluate compliance for the site
//!   sync        Push queued submissions to the outbox

mod commands;
mod ui;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use plantsafe::config::{Config, ConfigWarning};
use plantsafe::presentation::{output, AppContext, Cli};

use crate::ui::context::UiContext;
use crate::ui::primitives::text::ColoredText;

/// `PLANTSAFE_LOG` wins; otherwise warnings, raised by each `-v`
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "plantsafe=info",
        2 => "plantsafe=debug",
        _ => "plantsafe=trace",
    };
    let filter = EnvFilter::try_from_env("PLANTSAFE_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}

fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    for warning in warnings {
        let location = match warning.line {
            Some(line) => format!("{}:{}", warning.file.display(), line),
            None => warning.file.display().to_string(),
        };
        let hint = warning
            .suggestion
            .as_deref()
            .map(|s| format!(" (did you mean '{}'?)", s))
            .unwrap_or_default();
        eprintln!(
            "{} unknown config key '{}' in {}{}",
            ColoredText::warning("Warning:").render(ui.color),
            warning.key,
            location,
            hint
        );
    }
}

fn run(cli: Cli) -> Result<()> {
    let working_dir = std::env::current_dir().ok();
    let (mut config, warnings) = Config::load_or_default(working_dir.as_deref());
    if let Some(site) = cli.site.clone() {
        config.site.id = site;
    }
    if let Some(dir) = cli.data_dir.clone() {
        config.storage.data_dir = Some(dir);
    }

    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);
    if !ui.json {
        print_config_warnings(&warnings, &ui);
    }

    let app = AppContext::from_config(config);
    commands::dispatch(cli.command, &app, &ui)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json = cli.json;

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if json {
                let _ = ui::json::emit(output::error_event(&format!("{:#}", err)));
            } else {
                eprintln!("Error: {:#}", err);
            }
            ExitCode::FAILURE
        }
    }
}
