// src/cli.rs
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cardform", version, about = "Payment card details form")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Cmd>,

    /// Ticks per second of the event loop (overrides `ui.tick_rate`)
    #[arg(long, global = true, value_name = "FLOAT")]
    pub tick_rate: Option<f64>,
}

#[derive(Subcommand, Debug, Default, PartialEq)]
pub enum Cmd {
    /// Run interactive TUI (default)
    #[default]
    Run,
    /// Validate card details without a terminal (exit code 1 when rejected)
    Check(CheckArgs),
}

#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct CheckArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    /// Digits in any grouping; formatted before validation
    #[arg(long, default_value = "")]
    pub number: String,
    #[arg(long, default_value = "")]
    pub exp_month: String,
    #[arg(long, default_value = "")]
    pub exp_year: String,
    #[arg(long, default_value = "")]
    pub cvc: String,
    /// Print the resulting session snapshot as JSON
    #[arg(long)]
    pub json: bool,
}
