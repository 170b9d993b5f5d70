//! ngv - NgRx action usage analyzer.
//!
//! Parses the command line, sets up logging and dispatches to the command.

use clap::Parser;
use miette::Result;
use ngv_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Analyze(analyze_args) => commands::analyze_execute(analyze_args),
        cli::Command::Graph(graph_args) => commands::graph_execute(graph_args),
    };

    result.map_err(error::cli_error_to_miette)
}
