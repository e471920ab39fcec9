mod action;
mod app;
mod check;
mod cli;
mod components;
mod config;
mod errors;
mod logging;
mod tui;

use std::process::ExitCode;

use crate::app::App;
use crate::cli::{Cli, Cmd};

use card_form::Outcome;
use clap::Parser;
use color_eyre::Result;

#[tokio::main]
pub async fn main() -> Result<ExitCode> {
    let args = Cli::parse();
    crate::errors::init()?;
    crate::logging::init()?;

    let mut config = crate::config::Config::new()?;
    if let Some(tick_rate) = args.tick_rate {
        config.ui.tick_rate = tick_rate;
    }

    match args.cmd.unwrap_or_default() {
        Cmd::Run => {
            let mut app = App::new(config);
            app.run().await?;
            Ok(ExitCode::SUCCESS)
        }
        Cmd::Check(check_args) => {
            let outcome = crate::check::run(&check_args, &mut std::io::stdout())?;
            Ok(if outcome == Outcome::Accepted {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }
    }
}
