//! app-packager CLI entry point.

use std::process::ExitCode;

use app_packager::advisor::{Advisor, ProjectLayout};
use app_packager::cli::Cli;
use app_packager::ui::create_ui;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr; stdout carries only the guide text.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("app_packager=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("app_packager=info"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("app-packager starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = create_ui();

    let result =
        ProjectLayout::current().and_then(|layout| Advisor::new(layout).run(ui.as_mut()));

    match result {
        Ok(session) => {
            tracing::debug!("Session finished: {:?}", session.outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
