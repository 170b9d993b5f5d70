//! Command-line interface definition for ngv.
//!
//! # Command Structure
//!
//! - `ngv analyze` - Find actions in a folder and export where they are used
//! - `ngv graph` - Turn an exported analysis into a node/link graph

mod commands;
mod validation;

use clap::Parser;

pub use commands::{AnalyzeArgs, Command, GraphArgs};
pub use validation::{parse_display_mode, parse_reducer_depth};

/// ngv - NgRx action usage analyzer
#[derive(Parser, Debug)]
#[command(
    name = "ngv",
    version,
    about = "Analyze how NgRx actions are used",
    long_about = "ngv finds the action classes of an NgRx project, classifies every place\n\
                  they are referenced (reducers, effects, methods, constructors) and builds\n\
                  a graph linking actions to the code that creates or handles them."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
