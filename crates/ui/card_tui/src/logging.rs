use std::{
    fs::{File, OpenOptions},
    path::Path,
};

use color_eyre::Result;
use lazy_static::lazy_static;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config;

lazy_static! {
    pub static ref LOG_ENV: String = format!("{}_LOGLEVEL", config::PROJECT_NAME.clone());
    pub static ref LOG_FILE: String = format!("{}.log", env!("CARGO_PKG_NAME"));
}

/// Level used when neither `RUST_LOG` nor `CARD_TUI_LOGLEVEL` is set.
const DEFAULT_DIRECTIVES: &str = "card_tui=info,card_form=info";

/// Earlier runs stay in the file; each start appends.
fn open_log_file(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Route `tracing` output to `<data_dir>/card_tui.log`.
///
/// The terminal belongs to the TUI, so nothing is written to stdout/stderr.
/// Field values never appear in events; the core only logs field keys and
/// lengths.
pub fn init() -> Result<()> {
    let directory = config::get_data_dir();
    std::fs::create_dir_all(&directory)?;
    let log_path = directory.join(LOG_FILE.as_str());
    let log_file = open_log_file(&log_path)?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV.as_str()))
        .or_else(|_| EnvFilter::try_new(DEFAULT_DIRECTIVES))?;

    let file_subscriber = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(ErrorLayer::default())
        .try_init()?;
    Ok(())
}
