use clap::{Args, Subcommand};
use ngv_config::OptionOverrides;
use ngv_graph::DisplayMode;
use std::path::PathBuf;

use crate::cli::validation::{parse_display_mode, parse_reducer_depth};

/// Available ngv subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a folder of TypeScript sources
    ///
    /// Finds action classes (a first field `type` with a literal type),
    /// collects every reference to them and prints the exported analysis
    /// as JSON.
    Analyze(AnalyzeArgs),

    /// Build the action graph from an exported analysis
    ///
    /// Reads the JSON written by `ngv analyze` and prints the graph in the
    /// selected display mode.
    Graph(GraphArgs),
}

/// Arguments for the analyze command
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Folder scanned recursively for `.ts` files
    #[arg(value_name = "FOLDER")]
    pub folder: PathBuf,

    /// Only look for actions in files matching this pattern
    ///
    /// Example: --actions '\.actions\.ts$'
    #[arg(short = 'a', long, value_name = "REGEX")]
    pub actions: Option<String>,

    /// Ignore references in files matching this pattern
    ///
    /// Example: --exclude '\.spec\.ts$'
    #[arg(short = 'x', long, value_name = "REGEX")]
    pub exclude: Option<String>,

    /// Remove the first match of this pattern from exported file paths
    #[arg(short = 'r', long, value_name = "REGEX")]
    pub remove: Option<String>,

    /// Keep references that have no usage besides the fallback
    #[arg(short = 'e', long)]
    pub empty_ref: bool,

    /// Write the analysis to this file instead of stdout
    #[arg(short = 's', long, value_name = "FILE")]
    pub save: Option<PathBuf>,

    /// Path to a config file (default: ngv.config.json or ngv.config.toml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl AnalyzeArgs {
    /// Options given on the command line; flags left off do not override.
    pub fn overrides(&self) -> OptionOverrides {
        OptionOverrides {
            folder: Some(self.folder.clone()),
            remove: self.remove.clone(),
            actions: self.actions.clone(),
            exclude: self.exclude.clone(),
            empty_ref: self.empty_ref.then_some(true),
            reducer_name_depth: None,
            save: self.save.clone(),
        }
    }
}

/// Arguments for the graph command
#[derive(Args, Debug)]
pub struct GraphArgs {
    /// Analysis JSON written by `ngv analyze`
    #[arg(value_name = "ANALYSIS_JSON")]
    pub input: PathBuf,

    /// Trailing path segments used to name reducer nodes
    ///
    /// Defaults to the configured reducerNameDepth (1).
    #[arg(short = 'd', long, value_name = "N", value_parser = parse_reducer_depth)]
    pub reducer_depth: Option<usize>,

    /// Display mode: reducers, split-reducers or no-reducers
    #[arg(
        short = 'm',
        long,
        value_name = "MODE",
        default_value_t = DisplayMode::SplitReducers,
        value_parser = parse_display_mode
    )]
    pub mode: DisplayMode,

    /// Only show actions declared under this path, and what they link to
    ///
    /// Example: --only src/app/todo
    #[arg(long, value_name = "PATH")]
    pub only: Option<String>,

    /// Write the graph to this file instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to a config file (default: ngv.config.json or ngv.config.toml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
