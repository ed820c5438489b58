//! loan-launcher entry point.

use std::process::ExitCode;

use clap::Parser;
use loan_launcher::cli::{working_dir, Cli, LaunchSession};
use loan_launcher::config::{executable_dir, ConfigOverrides};
use loan_launcher::shell::{is_ci, is_interactive_console};
use loan_launcher::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so they never interleave with the calculator's stdout.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("loan_launcher=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("loan_launcher=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("loan-launcher starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };

    if cli.no_color {
        console::set_colors_enabled(false);
        std::env::set_var("NO_COLOR", "1");
    }

    let interactive = is_interactive_console();
    let mut ui = create_ui(interactive, output_mode);

    let exe_dir = executable_dir();
    let cwd = working_dir(std::env::current_dir(), exe_dir.as_deref());

    let session = ConfigOverrides::from_env()
        .and_then(|env| LaunchSession::prepare(&cli, &cwd, exe_dir.as_deref(), env));

    let session = match session {
        Ok(session) => session,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };

    let pause = session.config.pause.should_pause(interactive, is_ci());
    let outcome = session.launcher(pause).run(ui.as_mut());

    tracing::debug!("Launch finished: {:?}", outcome);
    ExitCode::from(outcome.exit_code)
}
