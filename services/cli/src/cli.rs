use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::error::AppError;
use crate::transform;

#[derive(Parser, Debug)]
#[command(
    name = "carshare",
    about = "Price rentals and derive ledger actions for a car-sharing batch",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Transform an input batch document into a priced output document
    /// (default command)
    Transform(TransformArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct TransformArgs {
    /// Override the configured input document path
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Override the configured output document path
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Output projection to emit
    #[arg(long, value_enum, default_value_t = ReportArg::Auto)]
    pub(crate) report: ReportArg,
}

/// CLI spelling of the output projections; `auto` lets the batch
/// content decide.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum ReportArg {
    #[default]
    Auto,
    Prices,
    Quotes,
    Actions,
    Modifications,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Transform(TransformArgs::default()));

    match command {
        Command::Transform(args) => transform::run(args),
    }
}
