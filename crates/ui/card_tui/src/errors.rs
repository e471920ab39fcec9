use std::path::Path;

use color_eyre::{Result, config::HookBuilder};
use tracing::error;

use crate::{config, logging};

/// Text appended to every panic report, pointing at the log to attach.
fn bug_report_note(log_path: &Path) -> String {
    format!(
        "The card form crashed. Please attach {} when reporting it.",
        log_path.display()
    )
}

/// Report text without terminal colours, as it goes into the log file.
fn plain_report(report: impl std::fmt::Display) -> String {
    strip_ansi_escapes::strip_str(report.to_string())
}

/// Install the eyre and panic hooks. Call once, before the terminal is entered.
///
/// A panic leaves raw mode first so the report is readable, then lands in
/// the log and exits with a failure status.
pub fn init() -> Result<()> {
    let log_path = config::get_data_dir().join(logging::LOG_FILE.as_str());
    let (panic_hook, eyre_hook) = HookBuilder::default()
        .panic_section(bug_report_note(&log_path))
        .capture_span_trace_by_default(false)
        .display_location_section(false)
        .display_env_section(false)
        .try_into_hooks()?;
    eyre_hook.install()?;

    std::panic::set_hook(Box::new(move |panic_info| {
        if let Err(err) = crate::tui::restore() {
            error!(%err, "could not restore the terminal");
        }
        let report = panic_hook.panic_report(panic_info);
        error!("card form panicked: {}", plain_report(&report));

        #[cfg(not(debug_assertions))]
        {
            use human_panic::{handle_dump, metadata, print_msg};
            let metadata = metadata!();
            let dump = handle_dump(&metadata, panic_info);
            if print_msg(dump, &metadata).is_err() {
                eprintln!("{report}");
            }
        }

        #[cfg(debug_assertions)]
        {
            better_panic::Settings::auto()
                .most_recent_first(false)
                .lineno_suffix(true)
                .verbosity(better_panic::Verbosity::Full)
                .create_panic_handler()(panic_info);
        }

        std::process::exit(libc::EXIT_FAILURE);
    }));

    Ok(())
}
