//! Graph command implementation.

use std::fs;

use ngv_config::OptionOverrides;
use ngv_graph::{ActionTree, GraphViews, decode_json};

use crate::cli::GraphArgs;
use crate::commands::utils;
use crate::error::{CliError, Result, ResultExt};
use crate::ui;

/// Execute the graph command.
///
/// 1. Decode the analysis into the graph (reducer names use the configured
///    depth unless `--reducer-depth` is given)
/// 2. Pick the projection for `--mode`
/// 3. With `--only`, keep the actions under that path and their neighbours
/// 4. Print or write the visible graph
pub fn execute(args: GraphArgs) -> Result<()> {
    let json = fs::read_to_string(&args.input)
        .with_path(&args.input)
        .with_hint("Create it with `ngv analyze <FOLDER> --save <FILE>`")?;

    let reducer_depth = match args.reducer_depth {
        Some(depth) => depth,
        None => {
            utils::load(args.config.as_deref(), &OptionOverrides::default())?.reducer_name_depth
        }
    };

    let graph = decode_json(&json, reducer_depth)?;
    let views = GraphViews::from_graph(graph);
    let mut view = views.get(args.mode).clone();
    tracing::debug!(mode = %args.mode, nodes = view.node_count(), "selected projection");

    if let Some(path) = &args.only {
        let tree = ActionTree::from_graph(views.original());
        let selection = tree
            .selection_for(path)
            .ok_or_else(|| CliError::InvalidArgument(format!("no actions declared under '{path}'")))?;
        view.apply_visibility(&selection);
    }

    let stats = view.statistics();
    let output = serde_json::to_string_pretty(&view.visible_graph())?;
    match &args.output {
        Some(path) => {
            utils::write_output(path, &output)?;
            ui::success(&format!("Wrote {} graph to {}", args.mode, path.display()));
        }
        None => println!("{output}"),
    }

    ui::info(&format!("{}: {}", args.mode, stats));
    Ok(())
}
